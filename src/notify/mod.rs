pub mod events;
pub mod notification;
pub mod notifier;

pub use events::MoodEvent;
pub use notification::Notification;
pub use notifier::{ChannelNotifier, LogNotifier, Notifier};
