//! Minimum-interval rate limiter for the MusicBrainz and Cover Art
//! Archive clients. Both services share the same courtesy limit of
//! about one request per second.

use std::thread;
use std::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive requests.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        RateLimiter {
            min_interval,
            last_request: None,
        }
    }

    /// Convenience: create a rate limiter from an interval in milliseconds.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Sleep if not enough time has elapsed since the last request.
    /// Must be called *before* making a request.
    pub fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}
