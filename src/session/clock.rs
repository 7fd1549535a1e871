use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, Timelike, Utc};

/// Wall-clock access for the controller, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Local hour (0-23) used by the time-of-day rules.
    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&Local).hour()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<(DateTime<Utc>, u32)>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>, hour: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new((start, hour))),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.0 += by;
    }

    pub fn set_hour(&self, hour: u32) {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.1 = hour;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).0
    }

    fn local_hour(&self) -> u32 {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).1
    }
}
