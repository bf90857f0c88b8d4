//! Notification delivery.
//!
//! The formatter hands finished payloads to an injected sink. Production
//! delivery POSTs to the platform's push gateway; tests collect payloads in
//! memory. Delivery is fire-and-forget from the webhook's point of view:
//! failures are logged by the caller and never surfaced to the push sender.

use std::time::Duration;

use async_trait::async_trait;

use crate::format::Notification;

/// Where formatted notifications go.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification payload.
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()>;
}

/// Push-gateway sink.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct GatewaySink {
    client: reqwest::Client,
    gateway_url: String,
}

impl GatewaySink {
    /// Build a sink against the given gateway URL.
    pub fn new(gateway_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            gateway_url: gateway_url.to_string(),
        })
    }
}

#[async_trait]
impl NotificationSink for GatewaySink {
    async fn deliver(&self, notification: &Notification) -> anyhow::Result<()> {
        let resp = self
            .client
            .post(&self.gateway_url)
            .json(notification)
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("gateway returned status {}", resp.status());
        }
        Ok(())
    }
}
