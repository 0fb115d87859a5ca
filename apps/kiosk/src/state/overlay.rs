//! # Overlay State
//!
//! Session wrapper around [`OverlayCoordinator`] that publishes the derived
//! "overlay active" flag.
//!
//! ## Single Source of Truth
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open_waiter() ──► Mutex<OverlayCoordinator> ──► Transition             │
//! │                          │                                              │
//! │                          │ (same lock held)                             │
//! │                          ▼                                              │
//! │                  watch::Sender<bool> ──► page: scroll/pointer lock      │
//! │                                      ──► any other subscriber           │
//! │                                                                         │
//! │  Subscribers only read. The flag is recomputed from the state on       │
//! │  every applied transition, so it can never disagree with it.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use taborder_core::{OverlayCommand, OverlayCoordinator, OverlayState, Transition};
use tokio::sync::watch;
use tracing::{debug, info};

use super::lock;

/// Overlay coordinator plus its published signal.
#[derive(Debug)]
pub struct CoordinatorState {
    coordinator: Mutex<OverlayCoordinator>,
    active_tx: watch::Sender<bool>,
}

impl CoordinatorState {
    /// Starts with no overlay open.
    pub fn new() -> Self {
        let coordinator = OverlayCoordinator::new();
        let (active_tx, _) = watch::channel(coordinator.is_overlay_active());
        CoordinatorState {
            coordinator: Mutex::new(coordinator),
            active_tx,
        }
    }

    /// Applies an overlay request and republishes the signal.
    pub fn apply(&self, command: OverlayCommand) -> Transition {
        let mut coordinator = lock(&self.coordinator);
        let transition = coordinator.apply(command);

        match transition {
            Transition::Applied { from, to } => {
                info!(%command, %from, %to, "Overlay transition");
                // Published under the coordinator lock so subscribers observe
                // transitions in the order they were applied
                let active = to.is_active();
                self.active_tx.send_if_modified(|current| {
                    if *current == active {
                        return false;
                    }
                    *current = active;
                    true
                });
            }
            Transition::Ignored { state } => {
                debug!(%command, %state, "Overlay request ignored");
            }
        }

        transition
    }

    /// Current overlay.
    pub fn state(&self) -> OverlayState {
        lock(&self.coordinator).state()
    }

    /// Current value of the published signal.
    pub fn is_overlay_active(&self) -> bool {
        *self.active_tx.borrow()
    }

    /// Read-only view of the signal for the embedding page.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.active_tx.subscribe()
    }
}

impl Default for CoordinatorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_follows_state() {
        let overlay = CoordinatorState::new();
        let rx = overlay.subscribe();
        assert!(!*rx.borrow());

        overlay.apply(OverlayCommand::OpenBill);
        assert!(*rx.borrow());
        assert!(overlay.is_overlay_active());

        overlay.apply(OverlayCommand::CloseBill);
        assert!(!*rx.borrow());
        assert_eq!(overlay.state(), OverlayState::None);
    }

    #[test]
    fn test_ignored_request_does_not_notify() {
        let overlay = CoordinatorState::new();
        let mut rx = overlay.subscribe();

        overlay.apply(OverlayCommand::CloseWaiter);
        assert!(!rx.has_changed().unwrap());

        overlay.apply(OverlayCommand::OpenWaiter);
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        // Admin takeover keeps the signal high: no change to observe
        overlay.apply(OverlayCommand::OpenAdminPage);
        assert!(!rx.has_changed().unwrap());
        assert_eq!(overlay.state(), OverlayState::AdminPin);
    }

    #[test]
    fn test_signal_agrees_with_state_after_every_command() {
        let overlay = CoordinatorState::new();
        let rx = overlay.subscribe();
        let script = [
            OverlayCommand::OpenWaiter,
            OverlayCommand::OpenBill,
            OverlayCommand::CloseWaiter,
            OverlayCommand::OpenBill,
            OverlayCommand::OpenAdminPage,
            OverlayCommand::CloseBill,
            OverlayCommand::CloseAdminPage,
        ];
        for command in script {
            overlay.apply(command);
            assert_eq!(*rx.borrow(), overlay.state() != OverlayState::None);
        }
    }
}
