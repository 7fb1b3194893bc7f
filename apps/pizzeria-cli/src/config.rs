//! # App Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PIZZERIA_LARGE_ORDER_MIN_ITEMS=4                                   │
//! │     PIZZERIA_LARGE_ORDER_RATE_BPS=1000                                 │
//! │     PIZZERIA_ONLINE_RATE_BPS=400                                       │
//! │     PIZZERIA_LOG=info,pizzeria=debug                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/pizzeria/config.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     4+ items → 10% off, online → 4% off                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [discounts.large_order]
//! enabled = true
//! min_items = 4
//! rate_bps = 1000
//!
//! [discounts.online_order]
//! enabled = true
//! rate_bps = 400
//!
//! [logging]
//! filter = "info,pizzeria=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pizzeria_core::DiscountPolicy;

use crate::error::{AppError, AppResult};

// =============================================================================
// Logging Settings
// =============================================================================

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info,pizzeria=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub discounts: DiscountPolicy,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        match config_path {
            // An explicit path must exist.
            Some(path) => {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    if path.exists() {
                        info!(?path, "Loading config from file");
                        config = Self::from_file(&path)?;
                    } else {
                        debug!(?path, "Config file not found, using defaults");
                    }
                }
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        self.discounts
            .validate()
            .map_err(|e| AppError::Config(e.validation().to_string()))?;

        if self.logging.filter.trim().is_empty() {
            return Err(AppError::Config("logging.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    ///
    /// A value that does not parse is a config error, never silently skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<()> {
        if let Some(n) = parse_override(&lookup, "PIZZERIA_LARGE_ORDER_MIN_ITEMS")? {
            debug!(min_items = n, "Overriding large order threshold from environment");
            self.discounts.large_order.min_items = n;
        }

        if let Some(bps) = parse_override(&lookup, "PIZZERIA_LARGE_ORDER_RATE_BPS")? {
            self.discounts.large_order.rate_bps = bps;
        }

        if let Some(bps) = parse_override(&lookup, "PIZZERIA_ONLINE_RATE_BPS")? {
            self.discounts.online_order.rate_bps = bps;
        }

        if let Some(filter) = lookup("PIZZERIA_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pizzeria", "pizzeria")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> AppResult<Option<T>> {
    lookup(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| {
                warn!(key, %value, "Rejecting non-numeric override");
                AppError::Config(format!("{key} must be a whole number, got {value:?}"))
            })
        })
        .transpose()
}
