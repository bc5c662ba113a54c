//! Mapping from raw catalog records to [`Category`] and [`Product`].
//!
//! Product URLs are rebuilt from the category chain rather than from the
//! page's ancestor links.

use crate::raw::{RawCategory, RawPrice, RawProduct};
use crate::{Category, Product};

/// Currency used when a product carries no price-display entries.
pub const FALLBACK_CURRENCY: &str = "BYN";

/// Maximum number of chain nodes walked when building a category path.
/// Ancestors beyond this depth contribute nothing.
pub const MAX_CATEGORY_DEPTH: usize = 16;

/// Builds the URL path segments of a category chain, root first.
///
/// Each node contributes its page slug with surrounding slashes removed.
/// Nodes whose slug is blank contribute nothing but do not interrupt the
/// chain.
#[must_use]
pub fn build_category_path(category: Option<&RawCategory>) -> Vec<String> {
    let mut chain = Vec::new();
    let mut node = category;
    while let Some(current) = node {
        if chain.len() == MAX_CATEGORY_DEPTH {
            tracing::warn!(
                category_id = current.id,
                max_depth = MAX_CATEGORY_DEPTH,
                "category chain too deep — ignoring remaining ancestors"
            );
            break;
        }
        chain.push(current);
        node = current.parent_category.as_deref();
    }

    chain
        .iter()
        .rev()
        .filter_map(|c| path_segment(&c.page.url))
        .map(str::to_owned)
        .collect()
}

/// Picks the display currency: the code of the first price entry, or
/// [`FALLBACK_CURRENCY`] when there are none.
#[must_use]
pub fn select_currency(prices: &[RawPrice]) -> &str {
    prices
        .first()
        .map_or(FALLBACK_CURRENCY, |price| price.name.as_str())
}

/// Maps a raw category record into a [`Category`].
#[must_use]
pub fn map_category(raw: RawCategory) -> Category {
    Category {
        id: raw.id.to_string(),
        name: raw.name,
        parent_id: raw.parent_category.map(|parent| parent.id.to_string()),
    }
}

/// Maps a raw product record into a [`Product`], resolving image and page
/// URLs against `shop_url`.
///
/// `vendor` and `barcode` are passed through as-is: an empty string stays
/// `Some("")`. `available` is left `false`; the source has no stock field.
#[must_use]
pub fn map_product(raw: RawProduct, shop_url: &str) -> Product {
    let base = shop_url.trim_end_matches('/');

    let images = raw
        .images
        .into_iter()
        .filter(|img| !img.image.is_empty())
        .map(|img| format!("{base}/pics/items/{}", img.image))
        .collect();

    let url = product_url(base, raw.category.as_ref(), &raw.page.url);
    let currency = select_currency(&raw.price_to_show).to_owned();
    let category_id = raw
        .category
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_default();

    Product {
        id: raw.id.to_string(),
        name: raw.name,
        status_id: raw.status_id,
        category_id,
        price: raw.price,
        currency,
        url,
        images,
        vendor: raw.vendor_code,
        barcode: raw.item_code,
        description: None,
        available: false,
    }
}

/// Builds `{base}/{seg1}/.../{slug}/` from the category chain and page slug.
fn product_url(base: &str, category: Option<&RawCategory>, page_slug: &str) -> String {
    let mut segments = build_category_path(category);
    if let Some(slug) = path_segment(page_slug) {
        segments.push(slug.to_owned());
    }

    if segments.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{}/", segments.join("/"))
    }
}

fn path_segment(slug: &str) -> Option<&str> {
    let trimmed = slug.trim_matches('/');
    if trimmed.trim().is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod tests;
