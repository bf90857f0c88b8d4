//! Application state shared across webhook handlers.

use std::sync::Arc;

use mirador_core::{HttpResolver, Resolver};

use crate::config::Config;
use crate::sink::{GatewaySink, NotificationSink};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Federation resolution client.
    pub resolver: Arc<dyn Resolver>,

    /// Notification delivery sink.
    pub sink: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Create application state from configuration, wiring the HTTP resolver
    /// and the push-gateway sink.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let resolver = HttpResolver::new(&config.api_origin)?;
        let sink = GatewaySink::new(&config.gateway_url)?;

        tracing::info!(
            api_origin = %config.api_origin,
            gateway_url = %config.gateway_url,
            "application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
            sink: Arc::new(sink),
        })
    }

    /// Assemble state from pre-built parts. Used by tests to inject fakes.
    pub fn from_parts(
        config: Config,
        resolver: Arc<dyn Resolver>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
            sink,
        }
    }
}
