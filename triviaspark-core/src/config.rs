//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/triviaspark/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/triviaspark/` (~/.config/triviaspark/)
//! - State/Logs: `$XDG_STATE_HOME/triviaspark/` (~/.local/state/triviaspark/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// TriviaSpark backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Display configuration (list limits, event timezone)
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// TriviaSpark backend API configuration
///
/// The backend authenticates organizers with a session cookie; paste the
/// cookie value from a logged-in browser session into `session_cookie`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend base URL (e.g. `https://triviaspark.example.com`)
    pub base_url: Option<String>,

    /// Session cookie value for authenticated endpoints
    pub session_cookie: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,

    /// Max retry attempts for transient failures
    #[serde(default = "default_api_max_retries")]
    pub max_retries: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            session_cookie: None,
            timeout_secs: default_api_timeout(),
            max_retries: default_api_max_retries(),
        }
    }
}

impl ApiConfig {
    /// Check if the API client can be constructed from this configuration
    pub fn is_ready(&self) -> bool {
        self.base_url.is_some()
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_none() {
            return Err(Error::Config(
                "api.base_url is required to talk to the backend".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_timeout() -> u64 {
    30
}

fn default_api_max_retries() -> usize {
    3
}

/// Display configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Number of events shown per list (upcoming, recent)
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
        }
    }
}

fn default_display_limit() -> usize {
    3
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/triviaspark/config.toml` (~/.config/triviaspark/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("triviaspark").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/triviaspark/` (~/.local/state/triviaspark/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("triviaspark")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/triviaspark/triviaspark.log`
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("triviaspark.log")
    }

    /// Ensure XDG base directory environment variables are set.
    ///
    /// This is mainly for CLI binaries that want explicit, stable path behavior
    /// before invoking other components that read these env vars.
    pub fn ensure_xdg_env() {
        let home = home_dir();

        if std::env::var("XDG_STATE_HOME").is_err() {
            std::env::set_var("XDG_STATE_HOME", home.join(".local/state"));
        }

        if std::env::var("XDG_CONFIG_HOME").is_err() {
            std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
        }
    }
}
