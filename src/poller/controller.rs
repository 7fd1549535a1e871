use anyhow::{bail, Context, Result};
use log::info;
use tokio::{task::JoinHandle, time::Duration};
use tokio_util::sync::CancellationToken;

use crate::session::MoodController;

use super::loop_worker::refresh_loop;

const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);
const DEBUG_INTERVAL: Duration = Duration::from_secs(5);

/// Drives periodic `refresh` calls so mood changes get noticed without the UI asking.
pub struct MoodPoller {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl MoodPoller {
    pub fn new() -> Self {
        Self {
            handle: None,
            cancel_token: None,
        }
    }

    /// 60 s normally, 5 s when `MOODSENSE_DEBUG` is `1` or `true`.
    pub fn default_interval() -> Duration {
        let debug_mode = std::env::var("MOODSENSE_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if debug_mode {
            DEBUG_INTERVAL
        } else {
            DEFAULT_INTERVAL
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self, controller: MoodController, interval: Duration) -> Result<()> {
        if self.handle.is_some() {
            bail!("mood poller already running");
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(refresh_loop(controller, interval, cancel_token.clone()));

        info!("Mood poller started ({}s interval)", interval.as_secs_f64());
        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("mood refresh loop task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }
}

impl Default for MoodPoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::{
        db::Database,
        health::LatestSnapshot,
        models::{Mood, SignalSnapshot, SleepStage},
        notify::{ChannelNotifier, MoodEvent},
        session::{ManualClock, SessionPolicy},
        settings::SettingsStore,
    };

    #[tokio::test]
    async fn polls_until_stopped() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("poll.sqlite3")).unwrap();
        let settings = Arc::new(SettingsStore::new(dir.path().join("settings.json")).unwrap());
        let signals = LatestSnapshot::with_initial(SignalSnapshot::new(50.0, 0.0, 0.0, SleepStage::Deep));
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 4, 2, 0, 0).unwrap(), 2);
        let (notifier, mut events) = ChannelNotifier::new();

        let controller = MoodController::open(
            db,
            Arc::new(signals.clone()),
            Arc::new(notifier),
            Arc::new(clock.clone()),
            settings,
            SessionPolicy::default(),
        )
        .await;

        let mut poller = MoodPoller::new();
        poller
            .start(controller.clone(), Duration::from_millis(10))
            .unwrap();
        assert!(poller.is_running());
        assert!(poller.start(controller.clone(), Duration::from_millis(10)).is_err());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.state().await.last_observed, Some(Mood::Tired));

        // A later poll picks up the new reading and announces it.
        clock.advance(chrono::Duration::minutes(10));
        signals.publish(SignalSnapshot::new(110.0, 40.0, 0.0, SleepStage::Awake));
        let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, MoodEvent::MoodChanged { mood: Mood::Nervous });

        poller.stop().await.unwrap();
        assert!(!poller.is_running());
        poller.stop().await.unwrap();
    }
}
