use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::models::{SignalSnapshot, SleepStage};

/// Where the controller gets its readings from. Implementations return the
/// latest known values immediately; they never wait for fresh data.
pub trait HealthDataSource: Send + Sync {
    fn latest(&self) -> SignalSnapshot;
}

/// One round of batch queries from the collector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchReadings {
    pub steps: f64,
    pub exercise_minutes: f64,
    pub heart_rate: f64,
    pub sleep_stage: SleepStage,
}

/// Shared cell holding the most recent snapshot. The collector writes,
/// the controller reads, subscribers get woken on change.
#[derive(Clone)]
pub struct LatestSnapshot {
    tx: Arc<watch::Sender<SignalSnapshot>>,
}

impl LatestSnapshot {
    pub fn new() -> Self {
        Self::with_initial(SignalSnapshot::default())
    }

    pub fn with_initial(snapshot: SignalSnapshot) -> Self {
        let (tx, _rx) = watch::channel(snapshot);
        Self { tx: Arc::new(tx) }
    }

    /// Replaces everything.
    pub fn publish(&self, snapshot: SignalSnapshot) {
        self.tx.send_replace(snapshot);
    }

    /// Merges a batch fetch. The batch heart rate is only used while no
    /// streamed value has arrived.
    pub fn apply_batch(&self, batch: BatchReadings) {
        self.tx.send_modify(|current| {
            current.steps = batch.steps;
            current.exercise_minutes = batch.exercise_minutes;
            current.sleep_stage = batch.sleep_stage;
            if current.heart_rate <= 0.0 {
                current.heart_rate = batch.heart_rate;
            }
        });
    }

    /// Live heart-rate sample; always wins.
    pub fn apply_streamed_heart_rate(&self, bpm: f64) {
        self.tx.send_modify(|current| current.heart_rate = bpm);
    }

    pub fn subscribe(&self) -> watch::Receiver<SignalSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for LatestSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthDataSource for LatestSnapshot {
    fn latest(&self) -> SignalSnapshot {
        *self.tx.borrow()
    }
}
