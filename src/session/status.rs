use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    inference::MoodRule,
    models::{Mood, SignalSnapshot, TextTone},
};

use super::SessionState;

/// Everything the mood card needs to draw itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStatus {
    pub mood: Mood,
    pub inferred_mood: Mood,
    pub rule: MoodRule,
    pub label: &'static str,
    pub color: String,
    pub text_tone: TextTone,
    pub image_key: &'static str,
    pub tip: &'static str,
    pub challenge: &'static str,
    pub challenge_index: usize,
    pub challenge_count: usize,
    pub total_completed: u64,
    pub streak: u64,
    pub override_active: bool,
    pub override_remaining_minutes: Option<i64>,
    pub has_health_data: bool,
    pub snapshot: SignalSnapshot,
}

impl MoodStatus {
    pub fn build(
        state: &SessionState,
        mood: Mood,
        inferred_mood: Mood,
        rule: MoodRule,
        snapshot: SignalSnapshot,
        now: DateTime<Utc>,
    ) -> Self {
        let challenge_count = mood.challenges().len();
        Self {
            mood,
            inferred_mood,
            rule,
            label: mood.label(),
            color: mood.color().hex(),
            text_tone: mood.text_tone(),
            image_key: mood.image_key(),
            tip: mood.tip(),
            challenge: state.current_challenge(mood),
            challenge_index: state.challenge_index % challenge_count,
            challenge_count,
            total_completed: state.total_completed,
            streak: state.streak,
            override_active: state.is_override_active(now),
            override_remaining_minutes: state.override_remaining_minutes(now),
            has_health_data: snapshot.has_data(),
            snapshot,
        }
    }

    /// "2 of 5"
    pub fn progress_label(&self) -> String {
        format!("{} of {}", self.challenge_index + 1, self.challenge_count)
    }
}
