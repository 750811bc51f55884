//! src/error.rs
//! ============================================================================
//! # Error types for the manifest browser
//!
//! Two failure families reach the user: [`LoadError`] when the manifest cannot
//! be fetched or parsed, and [`ActionError`] when a per-file action (copy URL,
//! download) fails. Neither is fatal; the UI stays interactive after both.
//! [`ConfigError`] covers the config file. [`AppError`] is what the binary
//! edge returns: load and config failures plus terminal and stdout I/O.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure to fetch or decode the manifest. No partial data is ever kept.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport-level failure talking to the manifest URL.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Reading a local manifest file failed.
    #[error("Failed to read manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not a valid manifest.
    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The snapshot is write-once.
    #[error("Manifest already loaded")]
    AlreadyLoaded,
}

/// Failure of a per-file action. The action is abandoned, never retried.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    #[error("No file selected")]
    NothingSelected,

    /// The resource path could not be resolved against the manifest location.
    #[error("Cannot resolve {path:?}: {reason}")]
    InvalidTarget { path: String, reason: String },

    #[error("Download of {target} failed: {reason}")]
    Download { target: String, reason: String },

    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ActionError {
    pub fn download_failed<S1: Into<String>, S2: Into<String>>(target: S1, reason: S2) -> Self {
        Self::Download {
            target: target.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_target<S1: Into<String>, S2: Into<String>>(path: S1, reason: S2) -> Self {
        Self::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Config file discovery, parsing and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to access config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub fn invalid_value<S1: Into<String>, S2: Into<String>>(field: S1, message: S2) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified error type for the binary edge: startup, the print mode and the
/// terminal session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal setup, drawing or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        Self::Terminal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_wraps_parse_failures() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = LoadError::from(parse).into();
        assert!(matches!(err, AppError::Load(LoadError::Parse(_))));
        assert!(err.to_string().starts_with("Manifest parse error"));
    }

    #[test]
    fn config_and_terminal_errors_keep_their_message() {
        let err: AppError = ConfigError::NotFound(PathBuf::from("/nope.toml")).into();
        assert!(matches!(err, AppError::Config(ConfigError::NotFound(_))));
        assert_eq!(err.to_string(), "Config file not found: \"/nope.toml\"");

        let err = AppError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }
}
