//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use mirador_core::{HttpResolver, Resolver};

use crate::cache::{MokaCache, PreviewCache};
use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Federation resolution client.
    pub resolver: Arc<dyn Resolver>,

    /// Rendered-response cache keyed by public URL.
    pub cache: Arc<dyn PreviewCache>,
}

impl AppState {
    /// Create application state from configuration, wiring the HTTP resolver
    /// and the in-process response cache.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let resolver = HttpResolver::new(&config.api_origin)?;
        let cache = MokaCache::new(Duration::from_secs(config.cache_ttl_secs));

        tracing::info!(
            cache_ttl_secs = config.cache_ttl_secs,
            api_origin = %config.api_origin,
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            cache: Arc::new(cache),
        })
    }

    /// Assemble state from pre-built parts. Used by tests to inject fakes.
    pub fn from_parts(
        config: Config,
        resolver: Arc<dyn Resolver>,
        cache: Arc<dyn PreviewCache>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            cache,
        }
    }
}
