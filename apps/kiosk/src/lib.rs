//! # TabOrder Kiosk Library
//!
//! Session layer of the table-side ordering screen: it owns the navigation
//! bar's state and exposes the commands the frontend invokes.
//!
//! ## Module Organization
//! ```text
//! taborder_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── NavState (session root)
//! │   ├── overlay.rs  ◄─── Overlay coordinator + active signal
//! │   ├── notification.rs ◄─── Toast slot + auto-dismiss timers
//! │   ├── menu.rs     ◄─── Category / toggle fetches
//! │   └── host.rs     ◄─── Selected category owned by the page
//! ├── commands/
//! │   ├── overlay.rs  ◄─── open_waiter, open_bill, open_admin_page, ...
//! │   ├── menu.rs     ◄─── get_nav_view, select_category, set_language
//! │   └── notification.rs ◄─── show / dismiss / expire toast
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{LocalSelection, NavState};
use taborder_remote::{HttpMenuSource, KioskConfig};

/// Runs one headless session and prints the rendered view as JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize logging (RUST_LOG, default info,taborder=debug)          │
/// │  2. Load config (TABORDER_CONFIG or platform config dir, then env)      │
/// │  3. Build NavState with the HTTP menu source                            │
/// │  4. Issue category / toggle fetches                                     │
/// │  5. Wait for them to settle (bounded by the request timeout)            │
/// │  6. Print the navigation view                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting TabOrder kiosk session");

    let config_path = std::env::var("TABORDER_CONFIG").ok().map(PathBuf::from);
    let config = KioskConfig::load_or_default(config_path);

    let source = HttpMenuSource::new(&config.remote).context("failed to build HTTP client")?;
    let nav = NavState::new(&config, Arc::new(source), Arc::new(LocalSelection::default()))
        .context("failed to initialize navigation session")?;

    nav.start();

    let wait = config.remote.request_timeout() + Duration::from_secs(1);
    if tokio::time::timeout(wait, nav.menu_settled()).await.is_err() {
        warn!(?wait, "Menu data did not settle in time, rendering defaults");
    }

    let view = nav.view();
    println!("{}", serde_json::to_string_pretty(&view)?);

    info!("Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=taborder=trace` - Show trace for taborder crates only
/// - Default: INFO, DEBUG for taborder crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,taborder=debug"));

    // Logs go to stderr so stdout carries only the view
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
