//! In-memory shape of a `yml_catalog` document.
//!
//! Built once per run from validated categories and products. Empty optional
//! strings are collapsed to `None` here, so the renderer only has to check
//! presence. Characters XML 1.0 does not allow are replaced with U+FFFD.

use chrono::{DateTime, TimeZone};
use ymlfeed_core::{Category, Product, ShopInfo};

/// `date` attribute format: minute precision, local time.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedDocument {
    pub date: String,
    pub shop: FeedShop,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedShop {
    pub name: String,
    pub company: String,
    pub url: String,
    pub currencies: Vec<FeedCurrency>,
    pub categories: Vec<FeedCategory>,
    pub offers: Vec<FeedOffer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCurrency {
    pub id: String,
    pub rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedCategory {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedOffer {
    pub id: String,
    pub available: bool,
    pub url: Option<String>,
    pub price: f64,
    pub currency_id: String,
    pub category_id: String,
    pub pictures: Vec<String>,
    pub name: String,
    pub vendor: Option<String>,
    pub barcode: Option<String>,
    pub description: Option<String>,
}

impl FeedDocument {
    /// Assembles the document. Only the shop currency is listed, at rate `1`.
    #[must_use]
    pub fn build<Tz>(
        generated_at: &DateTime<Tz>,
        shop: &ShopInfo,
        categories: &[Category],
        products: &[Product],
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: generated_at.format(DATE_FORMAT).to_string(),
            shop: FeedShop {
                name: xml_safe(&shop.name),
                company: xml_safe(&shop.company),
                url: xml_safe(&shop.url),
                currencies: vec![FeedCurrency {
                    id: xml_safe(&shop.currency),
                    rate: "1".to_owned(),
                }],
                categories: categories.iter().map(FeedCategory::from).collect(),
                offers: products.iter().map(FeedOffer::from).collect(),
            },
        }
    }
}

impl From<&Category> for FeedCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: xml_safe(&category.id),
            parent_id: non_empty(category.parent_id.as_deref()),
            name: xml_safe(&category.name),
        }
    }
}

impl From<&Product> for FeedOffer {
    fn from(product: &Product) -> Self {
        Self {
            id: xml_safe(&product.id),
            available: product.available,
            url: non_empty(Some(product.url.as_str())),
            // -0.0 + 0.0 == +0.0, so a negative zero never reaches the output.
            price: product.price + 0.0,
            currency_id: xml_safe(&product.currency),
            category_id: xml_safe(&product.category_id),
            pictures: product.image_urls().map(xml_safe).collect(),
            name: xml_safe(&product.name),
            vendor: non_empty(product.vendor.as_deref()),
            barcode: non_empty(product.barcode.as_deref()),
            description: non_empty(product.description.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(xml_safe)
}

/// Copies `value`, replacing characters outside the XML 1.0 `Char` production
/// with U+FFFD.
pub(crate) fn xml_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}
