//! Response caching behind an injected key-value seam.
//!
//! The rendered HTML response is the only persisted artifact of the preview
//! pipeline. It is cached by URL key with a fixed TTL and invalidated only by
//! expiry. The trait exists so handlers can be tested against an in-memory
//! double and so the store could be swapped for a real edge cache without
//! touching the resolution chain.
//!
//! Writes are fire-and-forget from the handler's point of view; concurrent
//! writers for one key race and the last one wins. All writers for a key
//! compute byte-identical output from the same upstream state, so the
//! overwrite is idempotent modulo staleness already bounded by the TTL.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

/// Cache capacity (number of entries). Each entry is a small HTML document,
/// typically 1-4KB.
const CACHE_CAPACITY: u64 = 100_000;

/// A cached rendered response.
#[derive(Clone, Debug)]
pub struct CachedPage {
    /// Rendered HTML document.
    pub html: String,
    /// When this entry was stored.
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

impl CachedPage {
    /// Wrap a freshly rendered document.
    pub fn new(html: String) -> Self {
        Self {
            html,
            cached_at: chrono::Utc::now(),
        }
    }
}

/// Key-value store for rendered preview documents.
#[async_trait]
pub trait PreviewCache: Send + Sync {
    /// Look up a cached page.
    async fn get(&self, key: &str) -> Option<CachedPage>;

    /// Store a page under `key` for the store's fixed TTL.
    async fn put(&self, key: String, page: CachedPage);
}

/// In-process moka-backed [`PreviewCache`] with a fixed TTL.
pub struct MokaCache {
    inner: Cache<String, CachedPage>,
}

impl MokaCache {
    /// Build a cache holding entries for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait]
impl PreviewCache for MokaCache {
    async fn get(&self, key: &str) -> Option<CachedPage> {
        self.inner.get(key).await
    }

    async fn put(&self, key: String, page: CachedPage) {
        self.inner.insert(key, page).await;
    }
}
