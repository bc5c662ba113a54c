//! Validation and filtering of mapped catalog records.
//!
//! Nothing here fails the export. Invalid records are dropped and logged at
//! `warn`; products outside the "new" status are dropped and logged at
//! `debug` since that is an expected filter, not a data error.

use crate::error::ValidationError;
use crate::{Category, Product};

/// Why a record was left out of the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    Invalid(ValidationError),
    StatusMismatch { status_id: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRecord {
    pub id: String,
    pub reason: DropReason,
}

/// Records that survived filtering, in source order, plus the drops.
#[derive(Debug, Clone, Default)]
pub struct FilteredCatalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub dropped_categories: Vec<DroppedRecord>,
    pub dropped_products: Vec<DroppedRecord>,
}

impl FilteredCatalog {
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.dropped_categories.len() + self.dropped_products.len()
    }
}

/// Validates categories and products independently and keeps the exportable
/// ones.
///
/// Products must pass [`Product::validate`] and then the "new" status
/// re-check ([`Product::is_new`]), regardless of which status the source was
/// asked for.
#[must_use]
pub fn filter_catalog(categories: Vec<Category>, products: Vec<Product>) -> FilteredCatalog {
    let mut filtered = FilteredCatalog {
        categories: Vec::with_capacity(categories.len()),
        products: Vec::with_capacity(products.len()),
        ..FilteredCatalog::default()
    };

    for category in categories {
        match category.validate() {
            Ok(()) => filtered.categories.push(category),
            Err(e) => {
                tracing::warn!(
                    category_id = %category.id,
                    error = %e,
                    "skipping invalid category"
                );
                filtered.dropped_categories.push(DroppedRecord {
                    id: category.id,
                    reason: DropReason::Invalid(e),
                });
            }
        }
    }

    for product in products {
        if let Err(e) = product.validate() {
            tracing::warn!(
                product_id = %product.id,
                error = %e,
                "skipping invalid product"
            );
            filtered.dropped_products.push(DroppedRecord {
                id: product.id,
                reason: DropReason::Invalid(e),
            });
            continue;
        }
        if !product.is_new() {
            tracing::debug!(
                product_id = %product.id,
                status_id = product.status_id,
                "skipping product — status is not new"
            );
            filtered.dropped_products.push(DroppedRecord {
                id: product.id,
                reason: DropReason::StatusMismatch {
                    status_id: product.status_id,
                },
            });
            continue;
        }
        filtered.products.push(product);
    }

    if filtered.products.is_empty() {
        tracing::warn!("no valid products found for export");
    }

    filtered
}
