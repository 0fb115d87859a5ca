//! # TabOrder Kiosk Entry Point
//!
//! Headless run of the navigation session: loads configuration, fetches the
//! menu for the configured company and prints the resulting view.
//!
//! ```text
//! TABORDER_COMPANY=bistro-7 TABORDER_LANGUAGE=ko taborder-kiosk
//! ```

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    taborder_kiosk::run().await
}
