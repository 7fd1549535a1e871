use serde::{Deserialize, Serialize};

use crate::models::Mood;

/// Things the core asks the outside world to do. Delivery is not our concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MoodEvent {
    #[serde(rename_all = "camelCase")]
    MoodChanged { mood: Mood },
    #[serde(rename_all = "camelCase")]
    ChallengeReminderDue { mood: Mood, delay_secs: u64 },
    #[serde(rename_all = "camelCase")]
    ChallengeCompleted {
        mood: Mood,
        total_completed: u64,
        streak: u64,
    },
    /// Success tap on the wrist.
    Haptic,
}

impl MoodEvent {
    pub fn mood(&self) -> Option<Mood> {
        match self {
            MoodEvent::MoodChanged { mood }
            | MoodEvent::ChallengeReminderDue { mood, .. }
            | MoodEvent::ChallengeCompleted { mood, .. } => Some(*mood),
            MoodEvent::Haptic => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = MoodEvent::ChallengeReminderDue {
            mood: Mood::Sad,
            delay_secs: 300,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "challengeReminderDue");
        assert_eq!(json["mood"], "sad");
        assert_eq!(json["delaySecs"], 300);
        assert_eq!(MoodEvent::Haptic.mood(), None);
    }
}
