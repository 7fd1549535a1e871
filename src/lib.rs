mod catalog;
pub mod db;
pub mod health;
pub mod history;
pub mod inference;
pub mod models;
pub mod notify;
pub mod poller;
pub mod session;
pub mod settings;
mod utils;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use tokio::sync::Mutex;

pub use catalog::{quote_at, rating_emoji, QUOTES};
pub use db::Database;
pub use health::{HealthDataSource, LatestSnapshot, SampleCollector, SampleSet};
pub use history::MoodJournal;
pub use inference::{explain, infer, infer_at, Inference, MoodRule};
pub use models::{Mood, MoodLogEntry, MoodLogInput, Rgb, SignalSnapshot, SleepStage, TextTone};
pub use notify::{ChannelNotifier, LogNotifier, MoodEvent, Notification, Notifier};
pub use poller::MoodPoller;
pub use session::{Clock, MoodController, MoodStatus, SessionPolicy, SessionState, SystemClock};
pub use settings::{SettingsStore, UserSettings};
pub use utils::logging::init_logging;

/// Everything a UI shell needs, wired together.
pub struct AppState {
    pub db: Database,
    pub mood: MoodController,
    pub journal: MoodJournal,
    pub settings: Arc<SettingsStore>,
    /// Push collector readings here.
    pub signals: LatestSnapshot,
    /// Or hand raw samples here.
    pub collector: SampleCollector,
    pub poller: Mutex<MoodPoller>,
}

/// Opens storage under `app_data_dir` and builds the controller with the
/// system clock and the given notifier.
pub async fn bootstrap(app_data_dir: &Path, notifier: Arc<dyn Notifier>) -> Result<AppState> {
    std::fs::create_dir_all(app_data_dir).with_context(|| {
        format!("failed to create app data directory {}", app_data_dir.display())
    })?;

    let db = Database::new(app_data_dir.join("moodsense.sqlite3"))?;
    let settings = Arc::new(SettingsStore::new(app_data_dir.join("settings.json"))?);
    let signals = LatestSnapshot::new();

    let mood = MoodController::open(
        db.clone(),
        Arc::new(signals.clone()),
        notifier,
        Arc::new(SystemClock),
        settings.clone(),
        SessionPolicy::default(),
    )
    .await;

    log::info!("MoodSense ready at {}", app_data_dir.display());

    Ok(AppState {
        journal: MoodJournal::new(db.clone()),
        collector: SampleCollector::new(signals.clone()),
        db,
        mood,
        settings,
        signals,
        poller: Mutex::new(MoodPoller::new()),
    })
}

impl AppState {
    pub async fn start_polling(&self) -> Result<()> {
        self.poller
            .lock()
            .await
            .start(self.mood.clone(), MoodPoller::default_interval())
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.poller.lock().await.stop().await
    }
}
