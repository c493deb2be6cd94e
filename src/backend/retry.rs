// SPDX-License-Identifier: MIT

//! Bounded exponential-backoff retry for transient rate-limit errors.
//!
//! This is the only point in the system that reasons about transient
//! failure; every remote operation funnels through it. Non-rate-limit
//! errors propagate unchanged on the first attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

/// How many times a rate-limited operation is retried before giving up.
pub const MAX_RETRIES: u32 = 3;
/// Initial backoff delay; doubles on each retry (2s, 4s, 8s).
pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(2000);

/// Execute `operation` with the default retry policy.
pub async fn execute_with_retry<T, F, Fut>(operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    execute_with_retry_config(operation, MAX_RETRIES, RATE_LIMIT_DELAY).await
}

/// Execute `operation`, retrying on rate-limit errors with exponential
/// backoff. Any other error, or an exhausted retry budget, propagates the
/// original error unchanged.
pub async fn execute_with_retry_config<T, F, Fut>(
    mut operation: F,
    retries: u32,
    delay: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut retries_left = retries;
    let mut delay = delay;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if retries_left > 0 && err.is_rate_limit() => {
                tracing::warn!(
                    delay_ms = delay.as_millis() as u64,
                    retries_left,
                    "Rate limit hit, retrying after backoff"
                );
                tokio::time::sleep(delay).await;
                retries_left -= 1;
                delay *= 2;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn rate_limit_error() -> AppError {
        AppError::Api {
            code: 429,
            kind: "general_rate_limit_exceeded".to_string(),
            message: "Rate limit for the current endpoint has been exceeded".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_permanent_rate_limit_calls_four_times() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = execute_with_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(rate_limit_error()) }
        })
        .await;

        assert!(result.is_err());
        // Initial attempt plus MAX_RETRIES retries.
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_non_retryable_error_propagates_immediately() {
        let calls = AtomicU32::new(0);

        let result: Result<()> = execute_with_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(AppError::Api {
                    code: 500,
                    kind: "general_unknown".to_string(),
                    message: "Server Error".to_string(),
                })
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_transient_rate_limit() {
        let calls = AtomicU32::new(0);

        let result = execute_with_retry(|| {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(rate_limit_error())
                } else {
                    Ok(42u32)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_delay_doubles() {
        let start = tokio::time::Instant::now();

        let _: Result<()> =
            execute_with_retry(|| async { Err(rate_limit_error()) }).await;

        // 2s + 4s + 8s of (auto-advanced) paused-clock sleeps.
        assert_eq!(start.elapsed(), Duration::from_secs(14));
    }

    #[tokio::test]
    async fn test_success_passes_value_through() {
        let result = execute_with_retry(|| async { Ok("ok") }).await;
        assert_eq!(result.unwrap(), "ok");
    }
}
