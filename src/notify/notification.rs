use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use super::MoodEvent;

/// A local notification request as the platform scheduler expects it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Scheduling a request with an identifier already pending replaces it.
    pub identifier: String,
    pub title: String,
    pub body: String,
    pub delay_secs: u64,
    pub user_info: BTreeMap<String, String>,
}

impl Notification {
    /// Renders the events that turn into user-visible notifications.
    pub fn from_event(event: &MoodEvent) -> Option<Self> {
        let mut user_info = BTreeMap::new();
        if let Some(mood) = event.mood() {
            user_info.insert("mood".to_string(), mood.as_str().to_string());
        }

        match event {
            MoodEvent::MoodChanged { mood } => Some(Self {
                identifier: format!("mood-change-{}", Uuid::new_v4()),
                title: "Mood Updated".into(),
                body: format!("Your mood has been set to {}", mood.label()),
                delay_secs: 1,
                user_info,
            }),
            MoodEvent::ChallengeReminderDue { mood, delay_secs } => {
                user_info.insert("type".to_string(), "challenge".to_string());
                Some(Self {
                    identifier: format!("challenge-{}", mood.as_str()),
                    title: "Mood Challenge".into(),
                    body: mood.reminder().to_string(),
                    delay_secs: *delay_secs,
                    user_info,
                })
            }
            MoodEvent::ChallengeCompleted { .. } | MoodEvent::Haptic => None,
        }
    }
}
