//! Mood journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Mood;

/// One reflection written by the user: what they felt and how the day went.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodLogEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Weekday the entry is about, e.g. "Tuesday".
    pub day: String,
    pub mood: Mood,
    pub note: String,
    pub answer: String,
    /// 1 (rough) ..= 5 (great)
    pub rating: u8,
}

impl MoodLogEntry {
    pub fn rating_emoji(&self) -> &'static str {
        crate::catalog::rating_emoji(self.rating)
    }
}

/// Input for a new journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodLogInput {
    /// Defaults to the local weekday of the entry's timestamp.
    #[serde(default)]
    pub day: Option<String>,
    pub mood: Mood,
    pub note: String,
    pub answer: String,
    pub rating: u8,
}
