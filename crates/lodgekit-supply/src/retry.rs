//! Retry with exponential backoff for transient supplier fetch errors.
//!
//! Non-retriable errors (4xx statuses other than 429, parse failures,
//! unknown suppliers) are propagated immediately without retrying.

use std::future::Future;
use std::time::Duration;

use crate::error::SupplyError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable errors:
/// - [`SupplyError::Http`] — network-level failure (connection reset,
///   timeout, etc.).
/// - [`SupplyError::HttpStatus`] with 429 or any 5xx — the endpoint may
///   recover.
///
/// Everything else is returned immediately: a 404 or a body that does not
/// parse will not improve on retry.
fn is_retriable(err: &SupplyError) -> bool {
    match err {
        SupplyError::Http(_) => true,
        SupplyError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        SupplyError::Deserialize { .. } | SupplyError::UnknownSupplier { .. } => false,
    }
}

/// Executes `operation` with exponential backoff retries on transient
/// errors.
///
/// On a retriable error the function sleeps for
/// `backoff_base_secs * 2^attempt` seconds and tries again, up to
/// `max_retries` additional attempts after the first try. If all retries
/// are exhausted the last error is returned.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SupplyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SupplyError>>,
{
    let mut last_err;
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^attempt seconds, shift capped to
        // prevent overflow on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient supplier fetch error — retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
