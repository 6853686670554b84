use crate::core::error::{Error, Result};
use crate::core::seed::DEFAULT_SHARE_MESSAGE;
use crate::utils::get_config_dir;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration read from `config.json` in the config directory
///
/// The file is optional and never written by the application; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme_choice: crate::theme::ThemeChoice,
    /// Simulated round trip for the login request
    pub login_latency_ms: u64,
    /// Simulated round trip for a CSV upload
    pub file_upload_latency_ms: u64,
    /// Simulated round trip for a manual data entry
    pub manual_entry_latency_ms: u64,
    /// Pre-filled personalised message of the share composer
    pub default_share_message: String,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_choice: crate::theme::ThemeChoice::default(),
            login_latency_ms: 1000,
            file_upload_latency_ms: 1500,
            manual_entry_latency_ms: 1000,
            default_share_message: DEFAULT_SHARE_MESSAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub const fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub const fn file_upload_latency(&self) -> Duration {
        Duration::from_millis(self.file_upload_latency_ms)
    }

    pub const fn manual_entry_latency(&self) -> Duration {
        Duration::from_millis(self.manual_entry_latency_ms)
    }
}

/// Loads the config at `path`.
///
/// A missing file yields the defaults silently; an unreadable or malformed
/// file yields the defaults with a warning.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config_from(path: &Path) -> AppConfig {
    match read_config(path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring config {}: {e}", path.display());
            AppConfig::default()
        }
    }
}

/// Reads and parses the config at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::Serialization`] if it is not a valid config object.
pub async fn read_config(path: &Path) -> Result<AppConfig> {
    let json = tokio::fs::read_to_string(path).await?;
    parse_config(&json)
}

/// Parses config JSON.
///
/// # Errors
///
/// Returns the JSON error if `json` is not a valid config object.
pub fn parse_config(json: &str) -> Result<AppConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the app config from disk, or returns default if not found.
pub async fn load_config() -> AppConfig {
    if let Some(mut path) = get_config_dir() {
        path.push("config.json");
        return load_config_from(&path).await;
    }
    AppConfig::default()
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// This blocks the current thread and should only be used before the iced
/// runtime starts. Everywhere else should use async `load_config()`.
pub fn load_config_blocking() -> AppConfig {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(load_config()),
        Err(e) => {
            tracing::warn!("Cannot start runtime for config loading: {e}");
            AppConfig::default()
        }
    }
}
