//! Minimum-delay pacing between requests of one session.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Default minimum delay between two requests.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(500);

/// Enforces a minimum delay between consecutive requests.
///
/// The time of the last request sits behind a tokio Mutex that is held
/// while waiting, so concurrent callers are released one at a time and
/// every pair of requests is at least `min_delay` apart.
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_delay: Duration,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_delay,
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    /// Waits until `min_delay` has passed since the previous request, then
    /// records the current time. The first call returns immediately.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let ready_at = prev + self.min_delay;
            if ready_at > Instant::now() {
                tracing::trace!(
                    "Rate limiting: waiting {:?}",
                    ready_at.duration_since(Instant::now())
                );
                sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY)
    }
}
