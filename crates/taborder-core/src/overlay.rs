//! # Overlay Coordinator
//!
//! Decides which overlay the navigation bar shows. At most one overlay is
//! open at a time, and the "overlay active" flag the rest of the application
//! reads is derived from the state rather than stored next to it.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Overlay Transitions                               │
//! │                                                                         │
//! │                 open_waiter              open_bill                      │
//! │   ┌────────┐ ◄──────────────── ┌──────┐ ────────────────► ┌────────┐   │
//! │   │ Waiter │                   │ None │                   │  Bill  │   │
//! │   └────────┘ ────────────────► └──────┘ ◄──────────────── └────────┘   │
//! │                close_waiter       ▲  │      close_bill                   │
//! │                                   │  │                                  │
//! │                 close_admin_page  │  │ open_admin_page                  │
//! │                                   │  ▼ (also from Waiter / Bill)        │
//! │                               ┌──────────┐                              │
//! │                               │ AdminPin │                              │
//! │                               └──────────┘                              │
//! │                                                                         │
//! │  Every other request is a no-op and reported as Transition::Ignored.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Admin Page Takeover
//! The admin page is reached from the logo and acts as an escape hatch: it
//! opens from any state and discards the waiter or bill overlay without
//! passing through `None`. While it is open the navigation bar is not
//! rendered at all (see [`crate::view::NavView`]).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Overlay State
// =============================================================================

/// Which overlay is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverlayState {
    /// Plain navigation bar, nothing on top.
    #[default]
    None,
    /// Call-waiter form on top of the navigation bar.
    Waiter,
    /// Bill-out form on top of the navigation bar.
    Bill,
    /// Admin pin page, replacing the navigation bar entirely.
    AdminPin,
}

impl OverlayState {
    /// The "overlay active" signal: true iff something other than the plain
    /// navigation bar is showing.
    #[inline]
    pub const fn is_active(&self) -> bool {
        !matches!(self, OverlayState::None)
    }

    /// True while the admin page replaces the navigation bar.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, OverlayState::AdminPin)
    }
}

impl std::fmt::Display for OverlayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayState::None => write!(f, "none"),
            OverlayState::Waiter => write!(f, "waiter"),
            OverlayState::Bill => write!(f, "bill"),
            OverlayState::AdminPin => write!(f, "admin_pin"),
        }
    }
}

// =============================================================================
// Commands & Transitions
// =============================================================================

/// A request to open or close an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverlayCommand {
    OpenWaiter,
    CloseWaiter,
    OpenBill,
    CloseBill,
    OpenAdminPage,
    CloseAdminPage,
}

impl std::fmt::Display for OverlayCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayCommand::OpenWaiter => write!(f, "open_waiter"),
            OverlayCommand::CloseWaiter => write!(f, "close_waiter"),
            OverlayCommand::OpenBill => write!(f, "open_bill"),
            OverlayCommand::CloseBill => write!(f, "close_bill"),
            OverlayCommand::OpenAdminPage => write!(f, "open_admin_page"),
            OverlayCommand::CloseAdminPage => write!(f, "close_admin_page"),
        }
    }
}

/// Outcome of an overlay request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied { from: OverlayState, to: OverlayState },
    /// The request was not valid in `state` and nothing changed.
    Ignored { state: OverlayState },
}

impl Transition {
    /// True if the state changed.
    #[inline]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }

    /// True if the overlay-active signal flipped.
    pub const fn signal_changed(&self) -> bool {
        match self {
            Transition::Applied { from, to } => from.is_active() != to.is_active(),
            Transition::Ignored { .. } => false,
        }
    }

    /// State after the request.
    pub const fn state(&self) -> OverlayState {
        match self {
            Transition::Applied { to, .. } => *to,
            Transition::Ignored { state } => *state,
        }
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Owner of the overlay state.
///
/// ## Invariants
/// - Exactly one [`OverlayState`] holds at any time.
/// - `Waiter` and `Bill` are entered only from `None`.
/// - `AdminPin` is entered from any state.
/// - [`OverlayCoordinator::is_overlay_active`] is always `state != None`.
///
/// State is never persisted: a new coordinator starts at `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayCoordinator {
    state: OverlayState,
}

impl OverlayCoordinator {
    /// Creates a coordinator with no overlay open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current overlay.
    #[inline]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Derived "overlay active" signal.
    #[inline]
    pub fn is_overlay_active(&self) -> bool {
        self.state.is_active()
    }

    /// Opens the call-waiter overlay if nothing else is open.
    pub fn open_waiter(&mut self) -> Transition {
        self.open_from_none(OverlayState::Waiter)
    }

    /// Closes the call-waiter overlay if it is the one open.
    pub fn close_waiter(&mut self) -> Transition {
        self.close(OverlayState::Waiter)
    }

    /// Opens the bill-out overlay if nothing else is open.
    pub fn open_bill(&mut self) -> Transition {
        self.open_from_none(OverlayState::Bill)
    }

    /// Closes the bill-out overlay if it is the one open.
    pub fn close_bill(&mut self) -> Transition {
        self.close(OverlayState::Bill)
    }

    /// Switches to the admin page from any state.
    ///
    /// Re-opening while already on the admin page is reported as ignored.
    pub fn open_admin_page(&mut self) -> Transition {
        if self.state.is_admin() {
            return Transition::Ignored { state: self.state };
        }
        self.set(OverlayState::AdminPin)
    }

    /// Leaves the admin page and returns to the plain navigation bar.
    ///
    /// Ignored unless the admin page is the one open.
    pub fn close_admin_page(&mut self) -> Transition {
        self.close(OverlayState::AdminPin)
    }

    /// Dispatches a command to the matching operation.
    pub fn apply(&mut self, command: OverlayCommand) -> Transition {
        match command {
            OverlayCommand::OpenWaiter => self.open_waiter(),
            OverlayCommand::CloseWaiter => self.close_waiter(),
            OverlayCommand::OpenBill => self.open_bill(),
            OverlayCommand::CloseBill => self.close_bill(),
            OverlayCommand::OpenAdminPage => self.open_admin_page(),
            OverlayCommand::CloseAdminPage => self.close_admin_page(),
        }
    }

    fn open_from_none(&mut self, target: OverlayState) -> Transition {
        if self.state != OverlayState::None {
            return Transition::Ignored { state: self.state };
        }
        self.set(target)
    }

    fn close(&mut self, expected: OverlayState) -> Transition {
        if self.state != expected {
            return Transition::Ignored { state: self.state };
        }
        self.set(OverlayState::None)
    }

    fn set(&mut self, to: OverlayState) -> Transition {
        let from = std::mem::replace(&mut self.state, to);
        Transition::Applied { from, to }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COMMANDS: [OverlayCommand; 6] = [
        OverlayCommand::OpenWaiter,
        OverlayCommand::CloseWaiter,
        OverlayCommand::OpenBill,
        OverlayCommand::CloseBill,
        OverlayCommand::OpenAdminPage,
        OverlayCommand::CloseAdminPage,
    ];

    #[test]
    fn test_initial_state() {
        let nav = OverlayCoordinator::new();
        assert_eq!(nav.state(), OverlayState::None);
        assert!(!nav.is_overlay_active());
    }

    #[test]
    fn test_open_close_waiter() {
        let mut nav = OverlayCoordinator::new();

        let t = nav.open_waiter();
        assert_eq!(
            t,
            Transition::Applied {
                from: OverlayState::None,
                to: OverlayState::Waiter
            }
        );
        assert!(t.signal_changed());
        assert!(nav.is_overlay_active());

        let t = nav.close_waiter();
        assert!(t.is_applied());
        assert_eq!(nav.state(), OverlayState::None);
        assert!(!nav.is_overlay_active());
    }

    #[test]
    fn test_open_waiter_twice_is_noop() {
        let mut nav = OverlayCoordinator::new();
        nav.open_waiter();

        let t = nav.open_waiter();
        assert_eq!(t, Transition::Ignored { state: OverlayState::Waiter });
        assert_eq!(nav.state(), OverlayState::Waiter);
    }

    #[test]
    fn test_bill_round_trip() {
        let mut nav = OverlayCoordinator::new();
        nav.open_bill();
        assert_eq!(nav.state(), OverlayState::Bill);
        nav.close_bill();
        assert_eq!(nav.state(), OverlayState::None);
        assert!(!nav.is_overlay_active());
    }

    #[test]
    fn test_no_overlay_to_overlay_transition() {
        let mut nav = OverlayCoordinator::new();
        nav.open_waiter();

        assert!(!nav.open_bill().is_applied());
        assert_eq!(nav.state(), OverlayState::Waiter);

        // Closing the wrong kind leaves the open one alone
        assert!(!nav.close_bill().is_applied());
        assert_eq!(nav.state(), OverlayState::Waiter);
    }

    #[test]
    fn test_close_when_nothing_open() {
        let mut nav = OverlayCoordinator::new();
        assert_eq!(nav.close_waiter(), Transition::Ignored { state: OverlayState::None });
        assert_eq!(nav.close_admin_page(), Transition::Ignored { state: OverlayState::None });
    }

    #[test]
    fn test_admin_page_takes_over_waiter() {
        let mut nav = OverlayCoordinator::new();
        nav.open_waiter();

        let t = nav.open_admin_page();
        assert_eq!(
            t,
            Transition::Applied {
                from: OverlayState::Waiter,
                to: OverlayState::AdminPin
            }
        );
        // Still active on both sides, so the signal does not flip
        assert!(!t.signal_changed());
        assert!(nav.is_overlay_active());
    }

    #[test]
    fn test_admin_page_takes_over_bill() {
        let mut nav = OverlayCoordinator::new();
        nav.open_bill();
        nav.open_admin_page();
        assert_eq!(nav.state(), OverlayState::AdminPin);

        // The discarded bill overlay does not come back
        nav.close_admin_page();
        assert_eq!(nav.state(), OverlayState::None);
        assert!(!nav.close_bill().is_applied());
    }

    #[test]
    fn test_admin_page_blocks_other_overlays() {
        let mut nav = OverlayCoordinator::new();
        nav.open_admin_page();
        assert!(!nav.open_waiter().is_applied());
        assert!(!nav.open_bill().is_applied());
        assert!(!nav.open_admin_page().is_applied());
        assert_eq!(nav.state(), OverlayState::AdminPin);
    }

    #[test]
    fn test_close_admin_page_leaves_other_overlays_open() {
        let mut nav = OverlayCoordinator::new();
        nav.open_waiter();
        assert_eq!(
            nav.close_admin_page(),
            Transition::Ignored { state: OverlayState::Waiter }
        );
        assert_eq!(nav.state(), OverlayState::Waiter);
        assert!(nav.is_overlay_active());

        nav.close_waiter();
        nav.open_bill();
        assert!(!nav.close_admin_page().is_applied());
        assert_eq!(nav.state(), OverlayState::Bill);
    }

    #[test]
    fn test_signal_matches_state_for_every_sequence() {
        // Exhaustive over all command sequences of length 4
        let mut stack = vec![(OverlayCoordinator::new(), 0usize)];
        while let Some((nav, depth)) = stack.pop() {
            assert_eq!(nav.is_overlay_active(), nav.state() != OverlayState::None);
            if depth == 4 {
                continue;
            }
            for command in ALL_COMMANDS {
                let mut next = nav.clone();
                let before = next.state();
                let t = next.apply(command);
                assert_eq!(t.state(), next.state());
                if !t.is_applied() {
                    assert_eq!(before, next.state());
                }
                stack.push((next, depth + 1));
            }
        }
    }

    #[test]
    fn test_waiter_bill_sequences_stay_in_range() {
        let commands = [
            OverlayCommand::OpenWaiter,
            OverlayCommand::CloseWaiter,
            OverlayCommand::OpenBill,
            OverlayCommand::CloseBill,
        ];
        // Every sequence of length 5 over the four waiter/bill commands
        for mut seed in 0..4usize.pow(5) {
            let mut nav = OverlayCoordinator::new();
            for _ in 0..5 {
                nav.apply(commands[seed % 4]);
                seed /= 4;
                assert!(matches!(
                    nav.state(),
                    OverlayState::None | OverlayState::Waiter | OverlayState::Bill
                ));
            }
        }
    }

    #[test]
    fn test_overlay_state_display() {
        assert_eq!(OverlayState::None.to_string(), "none");
        assert_eq!(OverlayState::AdminPin.to_string(), "admin_pin");
        assert_eq!(OverlayCommand::OpenAdminPage.to_string(), "open_admin_page");
    }
}
