//! Error types for content loading
//!
//! Every failure carries the content path it was raised for, so callers can
//! log a precise message while showing the reader a fixed fallback text.

/// Errors raised while fetching or decoding a content document
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document does not exist at the source
    #[error("content not found: {path}")]
    NotFound { path: String },

    /// The source answered with a non-success HTTP status
    #[error("unexpected status {status} for {path}")]
    Status { path: String, status: u16 },

    /// IO error while reading from a directory source
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Network-level failure (connect, timeout, body read)
    #[error("transport error for {path}: {message}")]
    Transport { path: String, message: String },

    /// The body is not valid JSON for the expected document shape
    #[error("invalid document {path}: {message}")]
    Parse { path: String, message: String },

    /// The body exceeds the configured size limit
    #[error("document too large: {path} is {size} bytes (max: {max})")]
    TooLarge { path: String, size: usize, max: usize },

    /// The path cannot be resolved against the source root
    #[error("invalid content path: {path}")]
    InvalidPath { path: String },
}

impl LoadError {
    /// Create not-found error for path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create status error for path
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create transport error for path
    pub fn transport(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create parse error for path
    pub fn parse(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Path of the document that failed
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path }
            | Self::Status { path, .. }
            | Self::Io { path, .. }
            | Self::Transport { path, .. }
            | Self::Parse { path, .. }
            | Self::TooLarge { path, .. }
            | Self::InvalidPath { path } => path,
        }
    }

    /// HTTP-equivalent status, when the failure has one
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for content operations
pub type LoadResult<T> = Result<T, LoadError>;
