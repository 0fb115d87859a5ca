//! # Kiosk Configuration
//!
//! Configuration for the table-order kiosk: which tenant it serves, where the
//! backend lives, and how long transient toasts stay up.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TABORDER_COMPANY=demo-bistro                                       │
//! │     TABORDER_LANGUAGE=ko                                               │
//! │     TABORDER_API_URL=https://...                                       │
//! │     TABORDER_REQUEST_TIMEOUT=10                                        │
//! │     TABORDER_TOAST_DISMISS_MS=3000                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/taborder-kiosk/kiosk.toml (Linux)                        │
//! │     ~/Library/Application Support/com.taborder.kiosk/kiosk.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [tenant]
//! company = "demo-bistro"
//! language = "en"
//!
//! [remote]
//! base_url = "https://tab-order-server.vercel.app/api"
//! request_timeout_secs = 10
//!
//! [notification]
//! auto_dismiss_ms = 3000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use taborder_core::{CompanyId, LanguageCode};

use crate::error::{RemoteError, RemoteResult};

/// Hosted TabOrder backend.
pub const DEFAULT_API_URL: &str = "https://tab-order-server.vercel.app/api";

// =============================================================================
// Tenant Configuration
// =============================================================================

/// Which restaurant this kiosk serves and in which language it starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Company identifier. Without one no remote data is requested.
    #[serde(default)]
    pub company: Option<String>,

    /// Initial display language.
    #[serde(default)]
    pub language: LanguageCode,
}

// =============================================================================
// Remote Settings
// =============================================================================

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    /// Base URL; `/categories` and `/toggles` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for RemoteSettings {
    fn default() -> Self {
        RemoteSettings {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl RemoteSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =============================================================================
// Notification Settings
// =============================================================================

/// Toast behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Delay before a non-persistent toast hides itself (milliseconds).
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss_ms: u64,
}

fn default_auto_dismiss() -> u64 {
    3000
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            auto_dismiss_ms: default_auto_dismiss(),
        }
    }
}

impl NotificationSettings {
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete kiosk configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub tenant: TenantConfig,

    #[serde(default)]
    pub remote: RemoteSettings,

    #[serde(default)]
    pub notification: NotificationSettings,
}

impl KioskConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (kiosk.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RemoteResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading kiosk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load kiosk config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RemoteResult<()> {
        let url = &self.remote.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RemoteError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                url
            )));
        }
        url::Url::parse(url)?;

        if self.remote.request_timeout_secs == 0 {
            return Err(RemoteError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        self.company()?;

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key/value lookup.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(company) = lookup("TABORDER_COMPANY") {
            debug!(company = %company, "Overriding company from environment");
            self.tenant.company = Some(company);
        }

        if let Some(language) = lookup("TABORDER_LANGUAGE") {
            match language.parse() {
                Ok(parsed) => self.tenant.language = parsed,
                Err(_) => warn!(language = %language, "Unknown language in environment"),
            }
        }

        if let Some(url) = lookup("TABORDER_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.remote.base_url = url;
        }

        if let Some(timeout) = lookup("TABORDER_REQUEST_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                self.remote.request_timeout_secs = secs;
            }
        }

        if let Some(delay) = lookup("TABORDER_TOAST_DISMISS_MS") {
            if let Ok(ms) = delay.parse::<u64>() {
                self.notification.auto_dismiss_ms = ms;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "taborder", "kiosk")
            .map(|dirs| dirs.config_dir().join("kiosk.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Validated company id, `None` if not configured.
    pub fn company(&self) -> RemoteResult<Option<CompanyId>> {
        match self.tenant.company.as_deref() {
            Some(raw) => Ok(Some(CompanyId::new(raw)?)),
            None => Ok(None),
        }
    }

    /// Initial display language.
    pub fn language(&self) -> LanguageCode {
        self.tenant.language
    }
}
