//! Export orchestration: validate request, fetch, filter, write.
//!
//! Phases run strictly in sequence. Fetch and write failures abort the run
//! and are wrapped with the phase that failed; record-level drops never do.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::filter_catalog;
use crate::error::RequestError;
use crate::mapping::{map_category, map_product};
use crate::raw::{RawCategory, RawProduct};
use crate::{Category, Product};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Source of raw catalog records.
pub trait CatalogSource {
    type Error: StdError + Send + Sync + 'static;

    fn fetch_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<RawCategory>, Self::Error>> + Send;

    /// Fetches products, asking the source to filter by `status_id`. The
    /// source may return other statuses.
    fn fetch_products_by_status(
        &self,
        status_id: i32,
    ) -> impl Future<Output = Result<Vec<RawProduct>, Self::Error>> + Send;
}

/// Destination for the validated catalog.
pub trait FeedWriter {
    type Error: StdError + Send + Sync + 'static;

    /// Writes the feed to `output_path`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the file cannot be created, encoded or
    /// flushed.
    fn write_feed(
        &self,
        output_path: &Path,
        shop: &ShopInfo,
        categories: &[Category],
        products: &[Product],
    ) -> Result<(), Self::Error>;
}

/// Shop metadata copied verbatim into the feed header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopInfo {
    pub name: String,
    pub company: String,
    /// Shop base URL; also the root for product and image URLs.
    pub url: String,
    /// Currency code emitted in `<currencies>`.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub output_path: PathBuf,
    pub shop: ShopInfo,
    /// Status the source is asked to filter by (`1` = new).
    pub status_id: i32,
}

impl ExportRequest {
    /// # Errors
    ///
    /// Returns the first missing or invalid field as a [`RequestError`].
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(RequestError::MissingOutputPath);
        }
        if self.shop.name.is_empty() {
            return Err(RequestError::MissingShopName);
        }
        if self.shop.company.is_empty() {
            return Err(RequestError::MissingShopCompany);
        }
        if self.shop.url.is_empty() {
            return Err(RequestError::MissingShopUrl);
        }
        if self.shop.currency.is_empty() {
            return Err(RequestError::MissingCurrency);
        }
        if self.status_id <= 0 {
            return Err(RequestError::InvalidStatusId(self.status_id));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    ValidatingRequest,
    FetchingCategories,
    FetchingProducts,
    Filtering,
    Serializing,
    Done,
}

impl fmt::Display for ExportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportPhase::ValidatingRequest => "validating request",
            ExportPhase::FetchingCategories => "fetching categories",
            ExportPhase::FetchingProducts => "fetching products",
            ExportPhase::Filtering => "filtering",
            ExportPhase::Serializing => "serializing",
            ExportPhase::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("failed to fetch categories: {0}")]
    FetchCategories(#[source] BoxError),

    #[error("failed to fetch products: {0}")]
    FetchProducts(#[source] BoxError),

    #[error("failed to write YML: {0}")]
    WriteFeed(#[source] BoxError),
}

impl ExportError {
    /// The phase in which the run failed.
    #[must_use]
    pub fn phase(&self) -> ExportPhase {
        match self {
            ExportError::InvalidRequest(_) => ExportPhase::ValidatingRequest,
            ExportError::FetchCategories(_) => ExportPhase::FetchingCategories,
            ExportError::FetchProducts(_) => ExportPhase::FetchingProducts,
            ExportError::WriteFeed(_) => ExportPhase::Serializing,
        }
    }
}

/// Counts reported by a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub categories_written: usize,
    pub products_written: usize,
    pub categories_dropped: usize,
    pub products_dropped: usize,
}

/// Runs one export from a [`CatalogSource`] into a [`FeedWriter`].
pub struct ExportCatalog<S, W> {
    source: S,
    writer: W,
}

impl<S, W> ExportCatalog<S, W>
where
    S: CatalogSource,
    W: FeedWriter,
{
    #[must_use]
    pub fn new(source: S, writer: W) -> Self {
        Self { source, writer }
    }

    /// Executes the export described by `request`.
    ///
    /// # Errors
    ///
    /// - [`ExportError::InvalidRequest`] before anything is fetched.
    /// - [`ExportError::FetchCategories`] / [`ExportError::FetchProducts`]
    ///   when the source fails.
    /// - [`ExportError::WriteFeed`] when the writer fails.
    pub async fn execute(&self, request: &ExportRequest) -> Result<ExportSummary, ExportError> {
        tracing::debug!(phase = %ExportPhase::ValidatingRequest, "export phase");
        request.validate()?;

        tracing::info!(phase = %ExportPhase::FetchingCategories, "fetching categories");
        let raw_categories = self
            .source
            .fetch_categories()
            .await
            .map_err(|e| ExportError::FetchCategories(Box::new(e)))?;
        tracing::info!(count = raw_categories.len(), "found categories");

        tracing::info!(
            phase = %ExportPhase::FetchingProducts,
            status_id = request.status_id,
            "fetching products"
        );
        let raw_products = self
            .source
            .fetch_products_by_status(request.status_id)
            .await
            .map_err(|e| ExportError::FetchProducts(Box::new(e)))?;
        tracing::info!(count = raw_products.len(), "found products");

        tracing::debug!(phase = %ExportPhase::Filtering, "export phase");
        let categories = raw_categories.into_iter().map(map_category).collect();
        let products = raw_products
            .into_iter()
            .map(|raw| map_product(raw, &request.shop.url))
            .collect();
        let filtered = filter_catalog(categories, products);

        tracing::info!(
            phase = %ExportPhase::Serializing,
            output_path = %request.output_path.display(),
            "generating YML file"
        );
        self.writer
            .write_feed(
                &request.output_path,
                &request.shop,
                &filtered.categories,
                &filtered.products,
            )
            .map_err(|e| ExportError::WriteFeed(Box::new(e)))?;

        let summary = ExportSummary {
            categories_written: filtered.categories.len(),
            products_written: filtered.products.len(),
            categories_dropped: filtered.dropped_categories.len(),
            products_dropped: filtered.dropped_products.len(),
        };
        tracing::info!(
            phase = %ExportPhase::Done,
            output_path = %request.output_path.display(),
            categories = summary.categories_written,
            offers = summary.products_written,
            "export completed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
