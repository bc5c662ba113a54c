use thiserror::Error;

/// A domain invariant violated by a single category or product.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("category ID is required")]
    MissingCategoryId,

    #[error("category name is required")]
    MissingCategoryName,

    #[error("product ID is required")]
    MissingProductId,

    #[error("product name is required")]
    MissingProductName,

    #[error("product price must not be negative (got {0})")]
    NegativePrice(f64),

    #[error("product must belong to a category")]
    MissingProductCategory,

    #[error("product currency is required")]
    MissingCurrency,
}

/// An export request that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("output path is required")]
    MissingOutputPath,

    #[error("shop name is required")]
    MissingShopName,

    #[error("shop company is required")]
    MissingShopCompany,

    #[error("shop URL is required")]
    MissingShopUrl,

    #[error("currency is required")]
    MissingCurrency,

    #[error("status ID must be positive (got {0})")]
    InvalidStatusId(i32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
