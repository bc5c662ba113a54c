pub mod app_config;
pub mod catalog;
pub mod config;
pub mod export;
pub mod mapping;
pub mod raw;

mod error;

pub use app_config::AppConfig;
pub use catalog::{filter_catalog, DropReason, DroppedRecord, FilteredCatalog};
pub use config::{load_app_config, load_app_config_from_env, parse_timeout};
pub use error::{ConfigError, RequestError, ValidationError};
pub use export::{
    CatalogSource, ExportCatalog, ExportError, ExportPhase, ExportRequest, ExportSummary,
    FeedWriter, ShopInfo,
};
pub use mapping::{
    build_category_path, map_category, map_product, select_currency, FALLBACK_CURRENCY,
};
pub use raw::{
    null_as_default, RawCategory, RawImage, RawPage, RawPageLink, RawPrice, RawProduct,
};

/// A product category as it appears in the exported feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// `None` (or an empty string) marks a root category.
    pub parent_id: Option<String>,
}

impl Category {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.as_deref().is_none_or(str::is_empty)
    }

    /// Checks the invariants a category must satisfy to be exported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCategoryId`] or
    /// [`ValidationError::MissingCategoryName`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingCategoryId);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingCategoryName);
        }
        Ok(())
    }
}

/// Status id the catalog uses for "new arrivals".
pub const NEW_STATUS_ID: i32 = 1;

/// A product mapped from the catalog source, ready to become a feed offer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub status_id: i32,
    pub category_id: String,
    pub price: f64,
    pub currency: String,
    /// Absolute canonical URL of the product page.
    pub url: String,
    /// Absolute image URLs in source order.
    pub images: Vec<String>,
    pub vendor: Option<String>,
    pub barcode: Option<String>,
    pub description: Option<String>,
    pub available: bool,
}

impl Product {
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.status_id == NEW_STATUS_ID
    }

    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Non-empty image URLs in source order.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Checks the structural invariants a product must satisfy to be exported.
    ///
    /// The "new" status rule is not part of this check; see [`Product::is_new`].
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingProductId);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingProductName);
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(ValidationError::NegativePrice(self.price));
        }
        if self.category_id.is_empty() {
            return Err(ValidationError::MissingProductCategory);
        }
        if self.currency.is_empty() {
            return Err(ValidationError::MissingCurrency);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product() -> Product {
        Product {
            id: "42".to_owned(),
            name: "Red Sneaker".to_owned(),
            status_id: 1,
            category_id: "5".to_owned(),
            price: 59.99,
            currency: "USD".to_owned(),
            url: "https://shop.example/shoes/red-sneaker/".to_owned(),
            ..Product::default()
        }
    }

    #[test]
    fn category_without_parent_is_root() {
        let cat = Category {
            id: "1".to_owned(),
            name: "Shoes".to_owned(),
            parent_id: None,
        };
        assert!(cat.is_root());
    }

    #[test]
    fn category_with_empty_parent_is_root() {
        let cat = Category {
            id: "1".to_owned(),
            name: "Shoes".to_owned(),
            parent_id: Some(String::new()),
        };
        assert!(cat.is_root());
    }

    #[test]
    fn category_with_parent_is_not_root() {
        let cat = Category {
            id: "2".to_owned(),
            name: "Boots".to_owned(),
            parent_id: Some("1".to_owned()),
        };
        assert!(!cat.is_root());
    }

    #[test]
    fn category_with_empty_name_fails_validation() {
        let cat = Category {
            id: "1".to_owned(),
            name: String::new(),
            parent_id: None,
        };
        assert_eq!(cat.validate(), Err(ValidationError::MissingCategoryName));
    }

    #[test]
    fn product_validation_accepts_zero_price() {
        let product = Product {
            price: 0.0,
            ..valid_product()
        };
        assert!(product.validate().is_ok());
    }

    #[test]
    fn product_validation_rejects_negative_price() {
        let product = Product {
            price: -0.01,
            ..valid_product()
        };
        assert!(matches!(
            product.validate(),
            Err(ValidationError::NegativePrice(_))
        ));
    }

    #[test]
    fn product_validation_rejects_nan_price() {
        let product = Product {
            price: f64::NAN,
            ..valid_product()
        };
        assert!(product.validate().is_err());
    }

    #[test]
    fn product_validation_requires_currency() {
        let product = Product {
            currency: String::new(),
            ..valid_product()
        };
        assert_eq!(product.validate(), Err(ValidationError::MissingCurrency));
    }

    #[test]
    fn product_validation_requires_category() {
        let product = Product {
            category_id: String::new(),
            ..valid_product()
        };
        assert_eq!(
            product.validate(),
            Err(ValidationError::MissingProductCategory)
        );
    }

    #[test]
    fn is_new_is_pinned_to_status_one() {
        assert!(valid_product().is_new());
        let product = Product {
            status_id: 2,
            ..valid_product()
        };
        assert!(!product.is_new());
    }

    #[test]
    fn image_urls_skips_empty_entries() {
        let product = Product {
            images: vec![
                "https://shop.example/pics/items/a.jpg".to_owned(),
                String::new(),
                "https://shop.example/pics/items/b.jpg".to_owned(),
            ],
            ..valid_product()
        };
        assert!(product.has_images());
        let urls: Vec<&str> = product.image_urls().collect();
        assert_eq!(
            urls,
            vec![
                "https://shop.example/pics/items/a.jpg",
                "https://shop.example/pics/items/b.jpg"
            ]
        );
    }
}
