//! # Kiosk Commands
//!
//! Everything the table-side frontend can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── overlay.rs       ◄─── Waiter / bill-out / admin page requests
//! ├── menu.rs          ◄─── View rendering, category clicks, language
//! └── notification.rs  ◄─── Toast show / dismiss / expire
//! ```
//!
//! Each command takes the session it acts on plus plain arguments and
//! returns something serializable, so a frontend bridge only has to forward
//! JSON.
//!
//! ```rust,ignore
//! let response = commands::overlay::open_bill(&nav);
//! assert!(response.overlay_active);
//!
//! let view = commands::menu::select_category(&nav, Some(7))?;
//! ```

pub mod menu;
pub mod notification;
pub mod overlay;
