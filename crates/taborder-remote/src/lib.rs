//! # taborder-remote: Remote Data for the TabOrder Navigation
//!
//! This crate talks to the TabOrder backend on behalf of the navigation bar:
//! it fetches the category list and the per-company feature toggles, keeps
//! at most one request per data set in flight, and loads the kiosk
//! configuration.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Remote Data Flow                                 │
//! │                                                                         │
//! │   company/language change                                               │
//! │            │                                                            │
//! │            ▼                                                            │
//! │  ┌──────────────────┐  spawn   ┌──────────────────┐  GET   ┌────────┐  │
//! │  │  KeyedFetcher    │ ───────► │  MenuSource      │ ─────► │  API   │  │
//! │  │  (per data set)  │          │  (HttpMenuSource)│        │        │  │
//! │  └────────┬─────────┘          └──────────────────┘        └────────┘  │
//! │           │ watch::Receiver<FetchState>                                 │
//! │           ▼                                                             │
//! │     kiosk session (renders defaults until Ready)                        │
//! │                                                                         │
//! │  Failures are logged and degrade to defaults. No retries, no cache.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Kiosk configuration (tenant, backend, toast delay)
//! - [`error`] - Remote error types
//! - [`fetch`] - Latest-key-wins fetcher
//! - [`source`] - `MenuSource` trait and HTTP implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taborder_remote::{HttpMenuSource, KioskConfig, MenuSource};
//!
//! let config = KioskConfig::load_or_default(None);
//! let source = HttpMenuSource::new(&config.remote)?;
//!
//! if let Some(company) = config.company()? {
//!     let categories = source.categories(&company, config.language()).await?;
//!     println!("{} categories", categories.len());
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod source;

pub use config::{KioskConfig, NotificationSettings, RemoteSettings, TenantConfig};
pub use error::{RemoteError, RemoteResult};
pub use fetch::{FetchState, KeyedFetcher};
pub use source::{HttpMenuSource, MenuSource};
