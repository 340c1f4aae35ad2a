//! Tracker and store errors

use std::path::PathBuf;

/// Failures of a key-value store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded for storage
    #[error("cannot encode value for {key}: {message}")]
    Encode { key: String, message: String },
}

impl StoreError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create encode error for key
    pub fn encode(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Encode {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

/// Tracker errors; only persisting can fail
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Writing the tracker array failed
    #[error("cannot persist tracker: {0}")]
    Store(#[from] StoreError),
}

/// Store result
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Tracker result
pub type Result<T> = std::result::Result<T, TrackerError>;
