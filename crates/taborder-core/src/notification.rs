//! # Notification Channel
//!
//! A single-slot mailbox for toast messages.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Notification Lifecycle                               │
//! │                                                                         │
//! │   show("A", persistent)         show("B", transient)                   │
//! │          │                              │                               │
//! │          ▼                              ▼                               │
//! │   ┌─────────────┐  overwritten  ┌─────────────┐  dismiss() /           │
//! │   │ A (active)  │ ────────────► │ B (active)  │  expire(B.id)          │
//! │   └─────────────┘   A is lost   └──────┬──────┘ ──────────────┐        │
//! │                                        │                      ▼        │
//! │                                        │              ┌─────────────┐  │
//! │                                        │              │ B (hidden)  │  │
//! │                                        │              └─────────────┘  │
//! │                                                                         │
//! │  • No queue, no history: the last show() wins                          │
//! │  • Replacement writes a whole new Notification with a fresh id         │
//! │  • expire(id) only hides the toast it was armed for                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistent toasts wait for [`NotificationChannel::dismiss`]. Transient ones
//! are hidden by a timer owned by the rendering side, which calls
//! [`NotificationChannel::expire`] with the id it was given.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Identifier minted by every [`NotificationChannel::show`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct NotificationId(#[ts(as = "String")] Uuid);

impl NotificationId {
    fn new() -> Self {
        NotificationId(Uuid::new_v4())
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NotificationId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(NotificationId)
            .map_err(|_| CoreError::InvalidNotificationId(s.to_string()))
    }
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    /// `true`: stays until dismissed. `false`: auto-dismissed after a delay.
    pub persistent: bool,
    /// Whether the message is currently displayed.
    pub active: bool,
}

/// Holds at most one notification.
#[derive(Debug, Clone, Default)]
pub struct NotificationChannel {
    current: Option<Notification>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message, replacing whatever was there.
    ///
    /// Returns the id the auto-dismiss timer must pass to [`Self::expire`].
    pub fn show(&mut self, message: impl Into<String>, persistent: bool) -> NotificationId {
        let notification = Notification {
            id: NotificationId::new(),
            message: message.into(),
            persistent,
            active: true,
        };
        let id = notification.id;
        self.current = Some(notification);
        id
    }

    /// Hides the current message. The text is kept.
    ///
    /// Returns `true` if a visible message was hidden.
    pub fn dismiss(&mut self) -> bool {
        match self.current.as_mut() {
            Some(n) if n.active => {
                n.active = false;
                true
            }
            _ => false,
        }
    }

    /// Timer callback for transient messages.
    ///
    /// Hides the message only if `id` is still the current, visible,
    /// non-persistent one; a newer message is left alone.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.active && !n.persistent => {
                n.active = false;
                true
            }
            _ => false,
        }
    }

    /// Last message shown, visible or not.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// The message on screen, if any.
    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.active)
    }

    /// True while a message is on screen.
    pub fn is_active(&self) -> bool {
        self.visible().is_some()
    }
}
