use std::sync::Arc;

use log::warn;
use tokio::sync::Mutex;

use crate::{
    db::Database,
    health::HealthDataSource,
    inference::{self, Inference},
    models::Mood,
    notify::{MoodEvent, Notifier},
    settings::SettingsStore,
};

use super::{Clock, MoodStatus, SessionPolicy, SessionState};

const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

/// Single owner of the session state. Every mutation goes through the one
/// mutex, so callers on any task see a consistent order of events.
#[derive(Clone)]
pub struct MoodController {
    state: Arc<Mutex<SessionState>>,
    db: Database,
    source: Arc<dyn HealthDataSource>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    settings: Arc<SettingsStore>,
}

impl MoodController {
    /// Restores the lifetime completion count; starts from zero if it cannot be read.
    pub async fn open(
        db: Database,
        source: Arc<dyn HealthDataSource>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        settings: Arc<SettingsStore>,
        policy: SessionPolicy,
    ) -> Self {
        let total_completed = match db.load_total_completed().await {
            Ok(total) => total,
            Err(err) => {
                log_error!("Failed to load challenge progress, starting at zero: {err:#}");
                0
            }
        };
        log_info!("Mood session opened with {} completed challenges", total_completed);

        let state = SessionState::with_policy(clock.now(), total_completed, policy);

        Self {
            state: Arc::new(Mutex::new(state)),
            db,
            source,
            notifier,
            clock,
            settings,
        }
    }

    /// Re-reads the signals, applies the override and announces significant changes.
    pub async fn refresh(&self) -> MoodStatus {
        let now = self.clock.now();
        let snapshot = self.source.latest();
        let inference = inference::explain(&snapshot, self.clock.local_hour());

        let (status, events) = {
            let mut state = self.state.lock().await;
            let mood = state.effective_mood(inference.mood, now);
            let events = state.on_mood_observed(mood, now);
            let status = MoodStatus::build(&state, mood, inference.mood, inference.rule, snapshot, now);
            (status, events)
        };

        for event in &events {
            if let MoodEvent::MoodChanged { mood } = event {
                log_info!("Significant mood change to {}", mood);
            }
        }
        self.dispatch(&events);
        status
    }

    pub async fn set_override(&self, mood: Mood) -> MoodStatus {
        let now = self.clock.now();
        let inference = self.current_inference();

        let (status, events) = {
            let mut state = self.state.lock().await;
            let events = state.set_override(mood, now);
            let status = MoodStatus::build(&state, mood, inference.mood, inference.rule, self.source.latest(), now);
            (status, events)
        };

        log_info!("Manual mood override set to {}", mood);
        self.dispatch(&events);
        status
    }

    pub async fn clear_override(&self) -> MoodStatus {
        {
            let mut state = self.state.lock().await;
            state.clear_override();
        }
        log_info!("Manual mood override cleared");
        self.refresh().await
    }

    /// Completes the challenge on screen for the current effective mood and
    /// persists the new lifetime total.
    pub async fn complete_challenge(&self) -> MoodStatus {
        let now = self.clock.now();
        let snapshot = self.source.latest();
        let inference = inference::explain(&snapshot, self.clock.local_hour());

        let (status, completed) = {
            let mut state = self.state.lock().await;
            let mood = state.effective_mood(inference.mood, now);
            let completed = state.complete_challenge(mood);
            let total = state.total_completed;

            // Saved under the lock so writes land in completion order.
            if let Err(err) = self.db.save_total_completed(total).await {
                log_error!("Failed to persist challenge total {total}: {err:#}");
            }

            let status = MoodStatus::build(&state, mood, inference.mood, inference.rule, snapshot, now);
            (status, completed)
        };

        let mut events = vec![completed];
        if self.settings.haptics_enabled() {
            events.push(MoodEvent::Haptic);
        }
        self.dispatch(&events);
        status
    }

    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    fn current_inference(&self) -> Inference {
        inference::explain(&self.source.latest(), self.clock.local_hour())
    }

    fn dispatch(&self, events: &[MoodEvent]) {
        let notifications = self.settings.notifications_enabled();
        for event in events {
            let is_notification = matches!(
                event,
                MoodEvent::MoodChanged { .. } | MoodEvent::ChallengeReminderDue { .. }
            );
            if is_notification && !notifications {
                warn!("Notifications disabled; dropping {:?}", event);
                continue;
            }
            self.notifier.notify(event);
        }
    }
}
