//! Retry policy for failed transport calls.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::EventRegistryError;

/// Default wait between two attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// How many times a request is attempted in total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Attempts {
    /// Retry until the call succeeds or the session is cancelled.
    #[default]
    Unlimited,
    /// At most this many attempts. `Limited(0)` still makes one attempt.
    Limited(u32),
}

impl Attempts {
    /// `-1` (or any negative value) means unlimited.
    pub fn from_count(count: i64) -> Self {
        if count < 0 {
            Attempts::Unlimited
        } else {
            Attempts::Limited(count.min(u32::MAX as i64) as u32)
        }
    }

    fn allows_another(&self, attempts_made: u32) -> bool {
        match self {
            Attempts::Unlimited => true,
            Attempts::Limited(max) => attempts_made < (*max).max(1),
        }
    }
}

/// Fixed-delay retry policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: Attempts,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: Attempts::Unlimited,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// A single attempt, no retries.
    pub fn never() -> Self {
        Self {
            attempts: Attempts::Limited(1),
            delay: Duration::ZERO,
        }
    }

    pub fn limited(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: Attempts::Limited(attempts),
            delay,
        }
    }

    /// Runs `f` until it succeeds, fails with a non-retryable error, or the
    /// attempts run out. Cancelling `cancel` while waiting between attempts
    /// returns [`EventRegistryError::Cancelled`].
    pub async fn run<T, F, Fut>(
        &self,
        cancel: &CancellationToken,
        label: &str,
        mut f: F,
    ) -> Result<T, EventRegistryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, eventregistry_api::Error>>,
    {
        let mut attempt = 0u32;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt = attempt.saturating_add(1);
                    if !is_retryable(&err) || !self.attempts.allows_another(attempt) {
                        return Err(err.into());
                    }
                    tracing::warn!(
                        "{} request failed (attempt {}): {}; retrying in {:.1}s",
                        label,
                        attempt,
                        err,
                        self.delay.as_secs_f64()
                    );
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::warn!("{} request cancelled while waiting to retry", label);
                            return Err(EventRegistryError::Cancelled);
                        }
                        _ = tokio::time::sleep(self.delay) => {}
                    }
                }
            }
        }
    }
}

/// Network failures, throttling and server errors are retried; client
/// errors, bad JSON and contract violations are not.
fn is_retryable(err: &eventregistry_api::Error) -> bool {
    match err {
        eventregistry_api::Error::RequestFailed(_) => true,
        eventregistry_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventregistry_api::{ContractViolation, Error};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn transport_error() -> Error {
        Error::RequestFailed("connection refused".to_string())
    }

    #[test]
    fn attempts_from_count() {
        assert_eq!(Attempts::from_count(-1), Attempts::Unlimited);
        assert_eq!(Attempts::from_count(3), Attempts::Limited(3));
    }

    #[tokio::test(start_paused = true)]
    async fn retries_until_success() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);
        let policy = RetryPolicy::default();
        let result = policy
            .run(&CancellationToken::new(), "test", move || {
                let calls = Arc::clone(&calls_clone);
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) < 3 {
                        Err(transport_error())
                    } else {
                        Ok(7)
                    }
                }
            })
            .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn limited_attempts_return_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);
        let policy = RetryPolicy::limited(3, Duration::from_secs(5));
        let result = policy
            .run(&CancellationToken::new(), "test", move || {
                let calls = Arc::clone(&calls_clone);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(Error::HttpStatus {
                        status: 503,
                        body: String::new(),
                    })
                }
            })
            .await;
        assert!(matches!(
            result,
            Err(EventRegistryError::Api(Error::HttpStatus { status: 503, .. }))
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_the_configured_delay() {
        let policy = RetryPolicy::limited(2, Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        let _ = policy
            .run(&CancellationToken::new(), "test", || async {
                Err::<(), _>(transport_error())
            })
            .await;
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test]
    async fn contract_violations_are_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_clone = Arc::clone(&calls);
        let result = RetryPolicy::default()
            .run(&CancellationToken::new(), "test", move || {
                let calls = Arc::clone(&calls_clone);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(Error::Contract(ContractViolation::NoResultRequested))
                }
            })
            .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_unlimited_retries() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(12)).await;
            canceller.cancel();
        });
        let result = RetryPolicy::default()
            .run(&token, "test", || async { Err::<(), _>(transport_error()) })
            .await;
        assert!(matches!(result, Err(EventRegistryError::Cancelled)));
    }
}
