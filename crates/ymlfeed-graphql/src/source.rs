//! [`CatalogSource`] backed by the GraphQL endpoint.

use ymlfeed_core::{CatalogSource, RawCategory, RawProduct};

use crate::client::GraphqlClient;
use crate::error::GraphqlError;
use crate::queries::{FILTER_CATEGORIES, FILTER_PRODUCTS};
use crate::types::{CategoriesData, ProductsData};

/// Fetches categories and a single fixed-size page of products.
pub struct GraphqlCatalogSource {
    client: GraphqlClient,
    page_size: u32,
}

impl GraphqlCatalogSource {
    #[must_use]
    pub fn new(client: GraphqlClient, page_size: u32) -> Self {
        Self { client, page_size }
    }

    /// Variables for the products query. The server treats the status filter
    /// as best-effort.
    fn product_variables(&self, status_id: i32) -> serde_json::Value {
        serde_json::json!({
            "first": self.page_size,
            "offset": 0,
            "filter": { "statusId": status_id },
        })
    }
}

impl CatalogSource for GraphqlCatalogSource {
    type Error = GraphqlError;

    async fn fetch_categories(&self) -> Result<Vec<RawCategory>, GraphqlError> {
        let data: CategoriesData = self
            .client
            .query("FilterCategory", FILTER_CATEGORIES, None)
            .await?;
        tracing::debug!(count = data.filter_category.len(), "fetched categories");
        Ok(data.filter_category)
    }

    async fn fetch_products_by_status(
        &self,
        status_id: i32,
    ) -> Result<Vec<RawProduct>, GraphqlError> {
        let data: ProductsData = self
            .client
            .query(
                "FilterProduct",
                FILTER_PRODUCTS,
                Some(self.product_variables(status_id)),
            )
            .await?;
        tracing::debug!(
            count = data.filter_product.len(),
            status_id,
            "received products from API"
        );
        Ok(data.filter_product)
    }
}
