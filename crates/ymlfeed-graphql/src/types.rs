//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};
use ymlfeed_core::{null_as_default, RawCategory, RawProduct};

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

/// Top-level response body. `data` is decoded separately once `errors` has
/// been checked.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: Vec<serde_json::Value>,
}

impl GraphqlErrorEntry {
    /// The message, followed by the dotted response path when one is given.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.path.is_empty() {
            return self.message.clone();
        }
        let path = self
            .path
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        format!("{} (at {path})", self.message)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filter_category: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filter_product: Vec<RawProduct>,
}
