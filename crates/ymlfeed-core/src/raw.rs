//! Raw catalog records as returned by the catalog source.
//!
//! ## Observed shape (`filterCategory` / `filterProduct`)
//!
//! ### Identifiers
//! Category and product ids are JSON integers. They become decimal strings
//! during mapping.
//!
//! ### `parentCategory`
//! Recursive; `null` on root categories. The products query nests it four
//! levels deep, so deeper ancestors are simply absent from the response.
//!
//! ### `priceToShow`
//! An ordered array of `{ name, value, suffix }` where `name` is the
//! currency code (`"BYN"`). May be empty or `null`.
//!
//! ### `itemCode` / `vendorCode`
//! `null` when unset. An empty string is a distinct, present value.
//!
//! ### `page.links`
//! Ready-made ancestor URL fragments. Decoded but not used for URL building;
//! the category chain is the source of truth.

use serde::{Deserialize, Deserializer};

/// One node of a category chain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Category landing page. Only `url` (the slug) is used.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: RawPage,

    #[serde(default)]
    pub parent_category: Option<Box<RawCategory>>,
}

/// A page record carrying the URL slug and, for products, ancestor links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<RawPageLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parent_url: String,
}

/// One entry of a product's price-display list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPrice {
    /// Currency code, e.g. `"BYN"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub value: f64,

    /// Display suffix, e.g. `"руб."`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawImage {
    /// Bare image filename, relative to `/pics/items/`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// A product record from the catalog source.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub status_id: i32,

    /// Leaf of the product's category chain. Absent categories fail
    /// validation downstream rather than decoding.
    #[serde(default)]
    pub category: Option<RawCategory>,

    #[serde(default)]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price_to_show: Vec<RawPrice>,

    /// Mapped to the offer barcode.
    #[serde(default)]
    pub item_code: Option<String>,

    /// Mapped to the offer vendor.
    #[serde(default)]
    pub vendor_code: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<RawImage>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub page: RawPage,
}

/// Treats an explicit JSON `null` like a missing field.
///
/// # Errors
///
/// Propagates the deserializer's error for values that are neither `null`
/// nor a valid `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
