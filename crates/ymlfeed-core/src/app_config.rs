use std::path::PathBuf;
use std::time::Duration;

use crate::export::{ExportRequest, ShopInfo};

#[derive(Clone)]
pub struct AppConfig {
    /// GraphQL endpoint; may embed an access token.
    pub graphql_endpoint: Option<String>,
    pub shop_name: String,
    pub shop_company: String,
    pub shop_url: String,
    pub currency: String,
    pub status_id: i32,
    pub output_path: PathBuf,
    pub http_timeout: Duration,
    pub log_level: String,
    pub fetch_max_attempts: u32,
    pub fetch_backoff_secs: u64,
    pub products_page_size: u32,
}

impl AppConfig {
    #[must_use]
    pub fn shop_info(&self) -> ShopInfo {
        ShopInfo {
            name: self.shop_name.clone(),
            company: self.shop_company.clone(),
            url: self.shop_url.clone(),
            currency: self.currency.clone(),
        }
    }

    #[must_use]
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            output_path: self.output_path.clone(),
            shop: self.shop_info(),
            status_id: self.status_id,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "graphql_endpoint",
                &self.graphql_endpoint.as_ref().map(|_| "[redacted]"),
            )
            .field("shop_name", &self.shop_name)
            .field("shop_company", &self.shop_company)
            .field("shop_url", &self.shop_url)
            .field("currency", &self.currency)
            .field("status_id", &self.status_id)
            .field("output_path", &self.output_path)
            .field("http_timeout", &self.http_timeout)
            .field("log_level", &self.log_level)
            .field("fetch_max_attempts", &self.fetch_max_attempts)
            .field("fetch_backoff_secs", &self.fetch_backoff_secs)
            .field("products_page_size", &self.products_page_size)
            .finish()
    }
}
