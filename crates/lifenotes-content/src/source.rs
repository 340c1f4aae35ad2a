//! Content sources
//!
//! A [`ContentSource`] resolves a relative content path (`data/mind.json`)
//! to the raw document body. Two sources ship with the crate:
//! - [`DirectorySource`] reads from a local directory tree
//! - [`HttpSource`] fetches from a static web server

use crate::error::LoadError;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Where content documents come from
#[async_trait]
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Fetch the raw body of the document at `path`
    ///
    /// # Errors
    /// - `LoadError::NotFound` / `LoadError::Status` when the document is missing
    /// - `LoadError::Io` / `LoadError::Transport` on read failures
    /// - `LoadError::InvalidPath` when `path` cannot be resolved
    async fn fetch(&self, path: &str) -> Result<String, LoadError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Reads documents from a directory on disk
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create source rooted at `root`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative content path, refusing anything that leaves the root
    fn resolve(&self, path: &str) -> Result<PathBuf, LoadError> {
        Ok(self.root.join(contained(path)?))
    }
}

/// `path` as a relative path that stays beneath its root
fn contained(path: &str) -> Result<&Path, LoadError> {
    let relative = Path::new(path);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || escapes {
        return Err(LoadError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(relative)
}

#[async_trait]
impl ContentSource for DirectorySource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let full = self.resolve(path)?;
        match tokio::fs::read_to_string(&full).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LoadError::not_found(path)),
            Err(e) => Err(LoadError::io_error(path, e)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Fetches documents over HTTP relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Create source for `base`; a missing trailing slash is added so that
    /// paths resolve beneath it
    ///
    /// # Errors
    /// `LoadError::InvalidPath` if `base` is not an absolute URL
    pub fn new(base: &str) -> Result<Self, LoadError> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let base = Url::parse(&normalized).map_err(|_| LoadError::InvalidPath {
            path: base.to_string(),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Resolve a relative content path against the base URL
    ///
    /// # Errors
    /// `LoadError::InvalidPath` if the path leaves the base or does not form
    /// a valid URL
    pub fn url_for(&self, path: &str) -> Result<Url, LoadError> {
        if path.contains("://") {
            return Err(LoadError::InvalidPath {
                path: path.to_string(),
            });
        }
        contained(path)?;
        self.base.join(path).map_err(|_| LoadError::InvalidPath {
            path: path.to_string(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let url = self.url_for(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::transport(path, e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::not_found(path));
        }
        if !status.is_success() {
            return Err(LoadError::status(path, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::transport(path, e))
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}
