use governor::{Quota, RateLimiter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::sync::Arc;
use std::time::Duration;
use nonzero_ext::*;

/// Spaces out question requests so reloads stay under the OpenTDB per-IP limit.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    period: Duration,
}

impl ApiRateLimiter {
    /// Returns `None` for a zero interval, which disables pacing.
    pub fn new(min_interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(min_interval)?.allow_burst(nonzero!(1u32));

        Some(Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            period: min_interval,
        })
    }

    pub fn from_secs(seconds: u64) -> Option<Self> {
        Self::new(Duration::from_secs(seconds))
    }

    pub async fn acquire(&self) {
        if self.limiter.check().is_err() {
            log::info!("🚦 Waiting for the request window ({}s between requests)", self.period.as_secs());
            self.limiter.until_ready().await;
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_disables_pacing() {
        assert!(ApiRateLimiter::from_secs(0).is_none());
        let limiter = ApiRateLimiter::from_secs(5).expect("limiter");
        assert_eq!(limiter.period(), Duration::from_secs(5));
    }

    #[test]
    fn first_request_is_not_delayed() {
        let limiter = ApiRateLimiter::from_secs(60).expect("limiter");
        let started = std::time::Instant::now();
        tokio_test::block_on(limiter.acquire());
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
