//! # App Errors
//!
//! Everything that can go wrong outside the pure core: reading and parsing
//! the config file, plus core InvalidValue errors while building the demo
//! orders.

use std::path::PathBuf;

use thiserror::Error;

use pizzeria_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The config file or an environment override holds unusable values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The config file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `AppConfig`.
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value object rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Unknown or incomplete command-line arguments.
    #[error("{0}")]
    Usage(String),
}

pub type AppResult<T> = Result<T, AppError>;
