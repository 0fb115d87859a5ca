//! # Notification State
//!
//! Session wrapper around [`NotificationChannel`]. Cloning it yields another
//! handle to the same slot, which is what the bill-out form receives as its
//! `show` function.
//!
//! Transient messages get a Tokio timer that calls `expire(id)` after the
//! configured delay; a newer message is never hidden by an older timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use taborder_core::{NotificationChannel, NotificationId};
use tracing::debug;

use super::lock;

/// Shared handle to the notification slot.
#[derive(Debug, Clone)]
pub struct NotificationState {
    channel: Arc<Mutex<NotificationChannel>>,
    auto_dismiss: Duration,
}

impl NotificationState {
    pub fn new(auto_dismiss: Duration) -> Self {
        NotificationState {
            channel: Arc::new(Mutex::new(NotificationChannel::new())),
            auto_dismiss,
        }
    }

    /// Shows a message, replacing the current one.
    ///
    /// Non-persistent messages hide themselves after the auto-dismiss delay.
    pub fn show(&self, message: impl Into<String>, persistent: bool) -> NotificationId {
        let id = lock(&self.channel).show(message, persistent);
        debug!(%id, persistent, "Notification shown");

        if !persistent {
            self.schedule_expiry(id);
        }
        id
    }

    /// Hides the current message.
    pub fn dismiss(&self) -> bool {
        lock(&self.channel).dismiss()
    }

    /// Hides the message `id` if it is still the current transient one.
    pub fn expire(&self, id: NotificationId) -> bool {
        lock(&self.channel).expire(id)
    }

    /// Executes a function with read access to the channel.
    pub fn with_channel<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&NotificationChannel) -> R,
    {
        let channel = lock(&self.channel);
        f(&channel)
    }

    fn schedule_expiry(&self, id: NotificationId) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            debug!(%id, "No runtime, transient notification will stay until dismissed");
            return;
        };

        let channel = self.channel.clone();
        let delay = self.auto_dismiss;
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if lock(&channel).expire(id) {
                debug!(%id, "Notification auto-dismissed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[tokio::test(start_paused = true)]
    async fn test_transient_message_auto_dismisses() {
        let toasts = NotificationState::new(DELAY);
        toasts.show("Waiter is on the way", false);
        assert!(toasts.with_channel(|c| c.is_active()));

        tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
        assert!(!toasts.with_channel(|c| c.is_active()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persistent_message_stays() {
        let toasts = NotificationState::new(DELAY);
        toasts.show("Payment failed", true);

        tokio::time::sleep(DELAY * 2).await;
        assert!(toasts.with_channel(|c| c.is_active()));

        assert!(toasts.dismiss());
        assert!(!toasts.with_channel(|c| c.is_active()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_old_timer_leaves_newer_message() {
        let toasts = NotificationState::new(DELAY);
        toasts.show("first", false);

        tokio::time::sleep(DELAY / 2).await;
        let second = toasts.show("second", false);

        // First timer fires here and must not hide "second"
        tokio::time::sleep(DELAY / 2 + Duration::from_millis(1)).await;
        let visible = toasts.with_channel(|c| c.visible().map(|n| n.id));
        assert_eq!(visible, Some(second));

        tokio::time::sleep(DELAY).await;
        assert!(!toasts.with_channel(|c| c.is_active()));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let toasts = NotificationState::new(DELAY);
        let for_bill_out = toasts.clone();

        for_bill_out.show("Bill requested", true);
        let message = toasts.with_channel(|c| c.current().map(|n| n.message.clone()));
        assert_eq!(message.as_deref(), Some("Bill requested"));
    }
}
