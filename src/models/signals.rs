//! Biometric readings as handed to the inference engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Most recent sleep sample classification.
///
/// Parsing never fails: anything unrecognised is `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum SleepStage {
    #[default]
    Unknown,
    Awake,
    InBed,
    Core,
    Deep,
    Rem,
}

impl SleepStage {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "Awake" => SleepStage::Awake,
            "In Bed" | "InBed" => SleepStage::InBed,
            "Core" => SleepStage::Core,
            "Deep" => SleepStage::Deep,
            "REM" => SleepStage::Rem,
            _ => SleepStage::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SleepStage::Unknown => "Unknown",
            SleepStage::Awake => "Awake",
            SleepStage::InBed => "In Bed",
            SleepStage::Core => "Core",
            SleepStage::Deep => "Deep",
            SleepStage::Rem => "REM",
        }
    }

    /// True for stages that say something about an actual sleep period.
    pub fn is_sleep_signal(&self) -> bool {
        !matches!(self, SleepStage::Unknown | SleepStage::Awake)
    }
}

impl From<String> for SleepStage {
    fn from(value: String) -> Self {
        SleepStage::parse(&value)
    }
}

impl From<&str> for SleepStage {
    fn from(value: &str) -> Self {
        SleepStage::parse(value)
    }
}

impl From<SleepStage> for String {
    fn from(stage: SleepStage) -> Self {
        stage.as_str().to_string()
    }
}

impl fmt::Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignalSnapshot {
    pub heart_rate: f64,
    pub steps: f64,
    pub exercise_minutes: f64,
    #[serde(default)]
    pub sleep_stage: SleepStage,
}

impl SignalSnapshot {
    pub fn new(heart_rate: f64, steps: f64, exercise_minutes: f64, sleep_stage: SleepStage) -> Self {
        Self {
            heart_rate,
            steps,
            exercise_minutes,
            sleep_stage,
        }
    }

    pub fn with_heart_rate(mut self, heart_rate: f64) -> Self {
        self.heart_rate = heart_rate;
        self
    }

    pub fn with_steps(mut self, steps: f64) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_exercise_minutes(mut self, exercise_minutes: f64) -> Self {
        self.exercise_minutes = exercise_minutes;
        self
    }

    pub fn with_sleep_stage(mut self, sleep_stage: SleepStage) -> Self {
        self.sleep_stage = sleep_stage;
        self
    }

    /// Whether the collector has produced anything at all, sleep included.
    pub fn has_data(&self) -> bool {
        self.heart_rate > 0.0
            || self.steps > 0.0
            || self.exercise_minutes > 0.0
            || self.sleep_stage != SleepStage::Unknown
    }
}
