pub mod history;
pub mod mood;
pub mod signals;

pub use history::{MoodLogEntry, MoodLogInput};
pub use mood::{Mood, Rgb, TextTone};
pub use signals::{SignalSnapshot, SleepStage};
