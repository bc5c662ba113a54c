//! HTTP client for the catalog's GraphQL endpoint.
//!
//! Wraps `reqwest` with a client-wide timeout and a fixed retry policy on
//! transport failures. HTTP status errors, GraphQL `errors` and decoding
//! failures surface immediately as [`GraphqlError`] variants.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GraphqlError;
use crate::retry::retry_with_backoff;
use crate::types::{GraphqlRequest, GraphqlResponse};

/// Client for a single GraphQL endpoint.
pub struct GraphqlClient {
    client: Client,
    endpoint: Url,
    max_attempts: u32,
    backoff_step_secs: u64,
}

impl GraphqlClient {
    /// Creates a client for `endpoint`.
    ///
    /// `max_attempts` is the total number of tries per request on transport
    /// failures; `backoff_step_secs` is the linear back-off step.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::InvalidEndpoint`] if `endpoint` is not a valid
    /// URL, or [`GraphqlError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        endpoint: &str,
        timeout: Duration,
        max_attempts: u32,
        backoff_step_secs: u64,
    ) -> Result<Self, GraphqlError> {
        let endpoint_url = Url::parse(endpoint).map_err(|e| GraphqlError::InvalidEndpoint {
            endpoint: redact_query(endpoint),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent("ymlfeed/0.1 (catalog-export)")
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
            max_attempts,
            backoff_step_secs,
        })
    }

    /// Runs `query` and decodes its `data` member into `T`.
    ///
    /// `operation` names the query in logs and decode errors.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] when every attempt failed to send.
    /// - [`GraphqlError::Status`] on a 4xx/5xx response.
    /// - [`GraphqlError::Protocol`] when the envelope reports errors.
    /// - [`GraphqlError::Decode`] when the body or `data` does not match `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, GraphqlError> {
        let request = GraphqlRequest { query, variables };
        tracing::debug!(operation, "sending GraphQL query");

        let client = &self.client;
        let endpoint = &self.endpoint;
        let body = &request;
        let response = retry_with_backoff(self.max_attempts, self.backoff_step_secs, move || {
            async move {
                client
                    .post(endpoint.clone())
                    .json(body)
                    .send()
                    .await
                    .map_err(GraphqlError::from)
            }
        })
        .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphqlError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        decode_response(operation, &text)
    }
}

/// Decodes a GraphQL response body, surfacing the first reported error.
pub(crate) fn decode_response<T: DeserializeOwned>(
    operation: &str,
    text: &str,
) -> Result<T, GraphqlError> {
    let envelope: GraphqlResponse =
        serde_json::from_str(text).map_err(|e| GraphqlError::Decode {
            context: operation.to_owned(),
            source: e,
        })?;

    if let Some(first) = envelope.errors.first() {
        return Err(GraphqlError::Protocol(first.describe()));
    }

    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(data).map_err(|e| GraphqlError::Decode {
        context: operation.to_owned(),
        source: e,
    })
}

/// Drops the query string, which may carry an access token.
fn redact_query(endpoint: &str) -> String {
    match endpoint.split_once('?') {
        Some((base, _)) => format!("{base}?[redacted]"),
        None => endpoint.to_owned(),
    }
}
