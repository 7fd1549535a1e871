use chrono::Duration;

/// Timing rules for overrides, mood-change debounce and reminders.
#[derive(Debug, Clone)]
pub struct SessionPolicy {
    /// How long a manual mood stays in effect.
    pub override_window: Duration,

    /// Minimum gap between two significant mood changes.
    pub mood_change_debounce: Duration,

    /// Delay before the challenge reminder fires.
    pub reminder_delay_secs: u64,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            override_window: Duration::minutes(30),
            mood_change_debounce: Duration::seconds(300),
            reminder_delay_secs: 300,
        }
    }
}
