pub mod aggregate;
pub mod collector;
pub mod source;
pub mod throttle;

pub use aggregate::{build_snapshot, QuantitySample, SleepSample};
pub use collector::{SampleCollector, SampleSet};
pub use source::{BatchReadings, HealthDataSource, LatestSnapshot};
pub use throttle::FetchThrottle;
