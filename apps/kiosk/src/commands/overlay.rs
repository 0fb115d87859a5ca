//! # Overlay Commands
//!
//! Open/close requests coming from the buttons, the overlays themselves and
//! the hidden admin gesture.
//!
//! ## Overlay Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │               open_waiter            open_bill                          │
//! │   ┌────────┐ ───────────► ┌──────┐   ───────────►  ┌──────┐             │
//! │   │ Waiter │ ◄─────────── │ None │ ◄───────────────│ Bill │             │
//! │   └────────┘ close_waiter └──────┘    close_bill   └──────┘             │
//! │       │                     ▲  │                      │                 │
//! │       │     close_admin_page│  │open_admin_page       │                 │
//! │       │                     │  ▼                      │                 │
//! │       └──open_admin_page──► AdminPin ◄──open_admin_page┘                │
//! │                                                                         │
//! │  Any other request is ignored and reported with `changed: false`.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use taborder_core::{OverlayCommand, OverlayState, Transition};
use tracing::debug;

use crate::state::NavState;

/// Result of an overlay request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayResponse {
    /// Overlay after the request.
    pub state: OverlayState,
    /// Value of the overlay-active signal after the request.
    pub overlay_active: bool,
    /// False if the request was ignored.
    pub changed: bool,
}

impl From<Transition> for OverlayResponse {
    fn from(transition: Transition) -> Self {
        let state = transition.state();
        OverlayResponse {
            state,
            overlay_active: state.is_active(),
            changed: transition.is_applied(),
        }
    }
}

/// Applies any overlay request.
pub fn apply_overlay(nav: &NavState, command: OverlayCommand) -> OverlayResponse {
    debug!(%command, "apply_overlay command");
    nav.apply(command).into()
}

/// "Call waiter" button.
pub fn open_waiter(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::OpenWaiter)
}

/// Waiter overlay's close handler.
pub fn close_waiter(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::CloseWaiter)
}

/// "Bill out" button.
pub fn open_bill(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::OpenBill)
}

/// Bill-out overlay's close handler.
pub fn close_bill(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::CloseBill)
}

/// Hidden admin gesture. Takes over from any overlay.
pub fn open_admin_page(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::OpenAdminPage)
}

/// Admin page's close handler.
pub fn close_admin_page(nav: &NavState) -> OverlayResponse {
    apply_overlay(nav, OverlayCommand::CloseAdminPage)
}

/// Current overlay without changing it.
pub fn get_overlay(nav: &NavState) -> OverlayResponse {
    debug!("get_overlay command");
    let state = nav.overlay().state();
    OverlayResponse {
        state,
        overlay_active: nav.overlay().is_overlay_active(),
        changed: false,
    }
}
