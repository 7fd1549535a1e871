use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{models::Mood, notify::MoodEvent};

use super::SessionPolicy;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRecord {
    pub mood: Mood,
    pub set_at: DateTime<Utc>,
}

/// Override, challenge cycling and streak bookkeeping for one session.
///
/// Every method takes `now` explicitly; nothing in here reads the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub override_record: Option<OverrideRecord>,
    pub challenge_index: usize,
    pub total_completed: u64,
    /// Only ever grows; nothing resets it yet.
    pub streak: u64,
    pub last_mood_change_at: DateTime<Utc>,
    pub last_observed: Option<Mood>,
    #[serde(skip)]
    pub policy: SessionPolicy,
}

impl SessionState {
    pub fn new(now: DateTime<Utc>, total_completed: u64) -> Self {
        Self::with_policy(now, total_completed, SessionPolicy::default())
    }

    pub fn with_policy(now: DateTime<Utc>, total_completed: u64, policy: SessionPolicy) -> Self {
        Self {
            override_record: None,
            challenge_index: 0,
            total_completed,
            streak: 0,
            last_mood_change_at: now,
            last_observed: None,
            policy,
        }
    }

    /// The override if it is still inside its window. Does not clear anything.
    pub fn active_override(&self, now: DateTime<Utc>) -> Option<&OverrideRecord> {
        self.override_record
            .as_ref()
            .filter(|record| now - record.set_at < self.policy.override_window)
    }

    pub fn is_override_active(&self, now: DateTime<Utc>) -> bool {
        self.active_override(now).is_some()
    }

    /// Whole minutes left on the active override, rounded down.
    pub fn override_remaining_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.active_override(now).map(|record| {
            let remaining = self.policy.override_window - (now - record.set_at);
            remaining.num_seconds() / 60
        })
    }

    /// Mood to report: the override while it lasts, else `inferred`.
    /// An expired override is dropped here.
    pub fn effective_mood(&mut self, inferred: Mood, now: DateTime<Utc>) -> Mood {
        if let Some(record) = self.active_override(now) {
            return record.mood;
        }
        self.override_record = None;
        inferred
    }

    pub fn set_override(&mut self, mood: Mood, now: DateTime<Utc>) -> Vec<MoodEvent> {
        self.override_record = Some(OverrideRecord { mood, set_at: now });
        self.challenge_index = 0;
        // Already announced below; the next observation must not announce it again.
        self.last_observed = Some(mood);
        self.mood_change_events(mood)
    }

    pub fn clear_override(&mut self) {
        self.override_record = None;
        self.challenge_index = 0;
    }

    /// Records the latest effective mood. Emits events only for a change that
    /// comes after the debounce window since the last significant change.
    pub fn on_mood_observed(&mut self, mood: Mood, now: DateTime<Utc>) -> Vec<MoodEvent> {
        let previous = self.last_observed.replace(mood);
        match previous {
            None => {
                self.last_mood_change_at = now;
                Vec::new()
            }
            Some(previous) if previous != mood => {
                if now - self.last_mood_change_at > self.policy.mood_change_debounce {
                    self.challenge_index = 0;
                    self.last_mood_change_at = now;
                    self.mood_change_events(mood)
                } else {
                    Vec::new()
                }
            }
            Some(_) => Vec::new(),
        }
    }

    pub fn complete_challenge(&mut self, mood: Mood) -> MoodEvent {
        self.total_completed += 1;
        self.streak += 1;
        self.challenge_index = (self.challenge_index + 1) % mood.challenges().len();

        MoodEvent::ChallengeCompleted {
            mood,
            total_completed: self.total_completed,
            streak: self.streak,
        }
    }

    pub fn current_challenge(&self, mood: Mood) -> &'static str {
        mood.challenge_at(self.challenge_index)
    }

    fn mood_change_events(&self, mood: Mood) -> Vec<MoodEvent> {
        vec![
            MoodEvent::MoodChanged { mood },
            MoodEvent::ChallengeReminderDue {
                mood,
                delay_secs: self.policy.reminder_delay_secs,
            },
        ]
    }
}
