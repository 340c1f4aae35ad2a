//! Error types for configuration and the command-line front end
//!
//! Page-level content failures never surface here: pages log them and
//! render the fixed fallback message instead.

use lifenotes_content::UnknownCategory;
use lifenotes_tracker::{StoreError, TrackerError, UnknownTracker};
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file cannot be read
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::NotesConfig`]
    #[error("invalid config {origin}: {message}")]
    Parse { origin: String, message: String },

    /// The content root is neither a directory nor an http(s) URL
    #[error("invalid content root {root}: {message}")]
    ContentRoot { root: String, message: String },

    /// A value is out of range
    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    /// Create parse error for `origin`
    pub fn parse(origin: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// Create invalid-value error
    pub fn invalid(field: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            field,
            message: message.to_string(),
        }
    }
}

/// Front-end errors
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    /// Configuration problem
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Opening the store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A tracker could not persist a change
    #[error("tracker error: {0}")]
    Tracker(#[from] TrackerError),

    /// Unknown category name
    #[error(transparent)]
    Category(#[from] UnknownCategory),

    /// Unknown tracker name
    #[error(transparent)]
    UnknownTracker(#[from] UnknownTracker),

    /// Logging could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, NotesError>;
