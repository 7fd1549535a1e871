use log::{info, warn};
use tokio::sync::mpsc;

use super::{MoodEvent, Notification};

/// Receives events emitted by the mood controller. Must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: &MoodEvent);
}

/// Forwards events over an unbounded channel to whoever delivers them.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<MoodEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<MoodEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: &MoodEvent) {
        if self.tx.send(event.clone()).is_err() {
            warn!("mood event receiver dropped; discarding {:?}", event);
        }
    }
}

/// Logs what would have been delivered. Used when no shell is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: &MoodEvent) {
        match Notification::from_event(event) {
            Some(notification) => info!(
                "notification {} in {}s: {} - {}",
                notification.identifier,
                notification.delay_secs,
                notification.title,
                notification.body
            ),
            None => info!("mood event {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;

    #[test]
    fn channel_notifier_forwards_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(&MoodEvent::MoodChanged { mood: Mood::Calm });
        notifier.notify(&MoodEvent::Haptic);

        assert_eq!(rx.try_recv().unwrap(), MoodEvent::MoodChanged { mood: Mood::Calm });
        assert_eq!(rx.try_recv().unwrap(), MoodEvent::Haptic);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_notifier_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(&MoodEvent::Haptic);
    }
}
