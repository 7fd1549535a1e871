//! Raw sample queries in, merged snapshot out.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::{build_snapshot, BatchReadings, FetchThrottle, LatestSnapshot, QuantitySample, SleepSample};

/// Everything one round of collector queries returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleSet {
    pub steps: Vec<QuantitySample>,
    pub exercise: Vec<QuantitySample>,
    pub heart_rate: Vec<QuantitySample>,
    pub sleep: Vec<SleepSample>,
}

#[derive(Clone)]
pub struct SampleCollector {
    snapshot: LatestSnapshot,
    throttle: Arc<Mutex<FetchThrottle>>,
}

impl SampleCollector {
    pub fn new(snapshot: LatestSnapshot) -> Self {
        Self::with_throttle(snapshot, FetchThrottle::default())
    }

    pub fn with_throttle(snapshot: LatestSnapshot, throttle: FetchThrottle) -> Self {
        Self {
            snapshot,
            throttle: Arc::new(Mutex::new(throttle)),
        }
    }

    /// Aggregates `samples` as of `now` and merges the result as a batch.
    /// Returns false without touching the snapshot when called too soon.
    pub fn ingest<Tz: TimeZone>(&self, samples: &SampleSet, now: &DateTime<Tz>) -> bool {
        let allowed = self
            .throttle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .try_acquire(now.with_timezone(&Utc));
        if !allowed {
            debug!("sample ingest throttled");
            return false;
        }

        let aggregated = build_snapshot(
            &samples.steps,
            &samples.exercise,
            &samples.heart_rate,
            &samples.sleep,
            now,
        );
        self.snapshot.apply_batch(BatchReadings {
            steps: aggregated.steps,
            exercise_minutes: aggregated.exercise_minutes,
            heart_rate: aggregated.heart_rate,
            sleep_stage: aggregated.sleep_stage,
        });
        true
    }
}
