//! Retry with exponential backoff for node requests.
//!
//! Only transient failures are retried (connection errors, timeouts, 5xx).
//! A 404 or a body that fails to decode is returned immediately.

use crate::error::RpcError;
use std::future::Future;
use std::time::Duration;

/// Run `f` up to `max_retries + 1` times, sleeping `base_delay * 2^n` between
/// attempts.
pub(crate) async fn with_retry<T, F, Fut>(
    max_retries: u32,
    base_delay: Duration,
    what: &str,
    f: F,
) -> Result<T, RpcError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, RpcError>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() => {
                let delay = base_delay.saturating_mul(2u32.saturating_pow(attempt));
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "[ci-02] {what} failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
    f().await
}
