//! Decoded-document cache using moka
//!
//! Documents are cached by content path and decoded type, so a path loaded
//! once per session is never fetched again (the "loaded" flags of each tab
//! live here instead of in page globals).

use moka::future::Cache;
use std::any::{Any, TypeId};
use std::future::Future;
use std::sync::Arc;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Type-aware cache key: the same path may be decoded as different types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedCacheKey {
    path: String,
    type_id: TypeId,
}

impl TypedCacheKey {
    /// Create key for `path` decoded as `T`
    #[inline]
    #[must_use]
    pub fn new<T: 'static>(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Content path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Cache of decoded content documents
#[derive(Debug, Clone)]
pub struct DocumentCache {
    inner: Cache<TypedCacheKey, Arc<dyn Any + Send + Sync>>,
}

impl DocumentCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Insert decoded document
    pub async fn insert<T>(&self, path: &str, document: T)
    where
        T: Send + Sync + 'static,
    {
        self.inner
            .insert(TypedCacheKey::new::<T>(path), Arc::new(document))
            .await;
    }

    /// Get decoded document
    pub async fn get<T>(&self, path: &str) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        self.inner
            .get(&TypedCacheKey::new::<T>(path))
            .await
            .and_then(|entry| entry.downcast::<T>().ok())
    }

    /// Get cached document or decode it with `f`; failures are not cached
    ///
    /// # Errors
    /// Whatever `f` returns
    pub async fn try_get_or_insert_with<T, E, F, Fut>(&self, path: &str, f: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(cached) = self.get::<T>(path).await {
            tracing::debug!(path, "content cache hit");
            return Ok(cached);
        }

        let document = Arc::new(f().await?);
        self.inner
            .insert(TypedCacheKey::new::<T>(path), document.clone())
            .await;
        Ok(document)
    }

    /// Check if a decoded document is cached
    pub async fn contains<T>(&self, path: &str) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.inner.contains_key(&TypedCacheKey::new::<T>(path))
    }

    /// Drop one cached document
    pub async fn invalidate<T>(&self, path: &str)
    where
        T: Send + Sync + 'static,
    {
        self.inner.invalidate(&TypedCacheKey::new::<T>(path)).await;
    }

    /// Cache statistics, after flushing pending maintenance
    pub async fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks().await;
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for DocumentCache {
    /// Create cache with default capacity (256 documents)
    fn default() -> Self {
        Self::new(256)
    }
}
