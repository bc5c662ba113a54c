use thiserror::Error;

/// Errors returned by the GraphQL catalog client.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// Network, timeout or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a 4xx/5xx status.
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope carried a non-empty `errors` array.
    #[error("GraphQL error: {0}")]
    Protocol(String),

    /// The response body or its `data` could not be decoded.
    #[error("failed to decode response for {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid GraphQL endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
