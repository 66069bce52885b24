//! Error types for the icon theme engine.
//!
//! Lookups that simply find nothing are not errors; they return `None`.
//! The variants here cover I/O and configuration problems only.

use std::path::PathBuf;

/// Result type alias for icon theme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or theme files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration{}: {message}", path.as_ref().map(|p| format!(" in '{}'", p.display())).unwrap_or_default())]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// Invalid value for a named setting.
    #[error("Invalid value for '{setting}': {message}")]
    InvalidValue { setting: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error, optionally tied to the file it came from.
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path,
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            setting: setting.into(),
            message: message.into(),
        }
    }
}
