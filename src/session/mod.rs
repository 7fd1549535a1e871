pub mod clock;
pub mod config;
pub mod controller;
pub mod state;
pub mod status;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionPolicy;
pub use controller::MoodController;
pub use state::{OverrideRecord, SessionState};
pub use status::MoodStatus;
