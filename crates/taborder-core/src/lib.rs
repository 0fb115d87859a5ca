//! # taborder-core: Pure Navigation Logic for TabOrder
//!
//! This crate holds the state rules of the table-order navigation bar as pure
//! functions and plain data. Nothing here touches the network, a timer, or
//! the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TabOrder Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web view)                          │   │
//! │  │    Nav bar ──► Waiter overlay ──► Bill-out overlay ──► Toast    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / view snapshots              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    taborder-kiosk (session state)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ taborder-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌─────────┐  │   │
//! │  │   │  overlay  │  │ notification │  │   menu    │  │  view   │  │   │
//! │  │   │ state     │  │ single slot  │  │ highlight │  │ NavView │  │   │
//! │  │   │ machine   │  │ last wins    │  │ + select  │  │         │  │   │
//! │  │   └───────────┘  └──────────────┘  └───────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, CompanyId, LanguageCode, toggles)
//! - [`locale`] - Display strings per language
//! - [`overlay`] - Overlay state machine and the derived "overlay active" flag
//! - [`notification`] - Single-slot notification channel
//! - [`menu`] - Category buttons with selection highlight
//! - [`view`] - What the frontend renders for a given state
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use taborder_core::overlay::{OverlayCoordinator, OverlayState};
//!
//! let mut nav = OverlayCoordinator::new();
//! nav.open_waiter();
//! nav.open_bill(); // ignored: another overlay is open
//! assert_eq!(nav.state(), OverlayState::Waiter);
//!
//! nav.open_admin_page(); // the logo always wins
//! assert_eq!(nav.state(), OverlayState::AdminPin);
//! assert!(nav.is_overlay_active());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod locale;
pub mod menu;
pub mod notification;
pub mod overlay;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use locale::NavLocale;
pub use menu::{MenuBar, MenuButton};
pub use notification::{Notification, NotificationChannel, NotificationId};
pub use overlay::{OverlayCommand, OverlayCoordinator, OverlayState, Transition};
pub use types::*;
pub use view::{BillOutProps, NavBarView, NavView, ToastView, ViewInput};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a company identifier.
///
/// Company ids travel in query strings; anything longer is a typo or abuse.
pub const MAX_COMPANY_ID_LEN: usize = 100;

/// Maximum length of a notification message.
pub const MAX_NOTIFICATION_LEN: usize = 500;
