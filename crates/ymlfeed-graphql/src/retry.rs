//! Fixed linear retry for GraphQL requests.
//!
//! Only transport failures are retried. HTTP status errors, GraphQL errors and
//! decoding failures are returned on the first occurrence.

use std::future::Future;
use std::time::Duration;

use crate::error::GraphqlError;

/// Returns `true` for errors raised while sending the request (connect,
/// timeout, reset). Builder and redirect errors are final.
pub(crate) fn is_retriable(err: &GraphqlError) -> bool {
    match err {
        GraphqlError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        GraphqlError::Status { .. }
        | GraphqlError::Protocol(_)
        | GraphqlError::Decode { .. }
        | GraphqlError::InvalidEndpoint { .. } => false,
    }
}

/// Runs `operation` up to `max_attempts` times in total.
///
/// Back-off schedule with `backoff_step_secs = 1`:
///
/// | Failed attempt | Sleep before next attempt |
/// |----------------|---------------------------|
/// | 1              | 1 s                       |
/// | 2              | 2 s                       |
///
/// The error from the last attempt is returned once attempts run out.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    backoff_step_secs: u64,
    mut operation: F,
) -> Result<T, GraphqlError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GraphqlError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_attempts {
                    return Err(err);
                }
                let delay_secs = backoff_step_secs.saturating_mul(u64::from(attempt));
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_secs,
                    error = %err,
                    "request failed — retrying"
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                attempt += 1;
            }
        }
    }
}
