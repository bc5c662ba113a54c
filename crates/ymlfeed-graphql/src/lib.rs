pub mod client;
pub mod error;
pub mod queries;
pub mod source;
pub mod types;

mod retry;

pub use client::GraphqlClient;
pub use error::GraphqlError;
pub use source::GraphqlCatalogSource;
