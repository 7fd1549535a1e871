use chrono::{DateTime, Duration, Utc};

/// Rejects fetches that come too soon after the previous one.
#[derive(Debug, Clone)]
pub struct FetchThrottle {
    min_interval: Duration,
    last_fetch: Option<DateTime<Utc>>,
}

impl FetchThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_fetch: None,
        }
    }

    /// Returns true and records `now` when a fetch may proceed.
    pub fn try_acquire(&mut self, now: DateTime<Utc>) -> bool {
        if let Some(last) = self.last_fetch {
            if now - last < self.min_interval {
                return false;
            }
        }
        self.last_fetch = Some(now);
        true
    }
}

impl Default for FetchThrottle {
    fn default() -> Self {
        Self::new(Duration::seconds(1))
    }
}
