//! Remote resolution client.
//!
//! Both services resolve content through the same three read-only lookups:
//! an entity from the federation directory, then messages and profiles from
//! whichever domain that entity record names as authoritative. The trait seam
//! exists so request handlers can be exercised with in-memory fakes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ResolveError;
use crate::model::{Entity, Message, Profile};

/// Timeout applied to every upstream request. A timed-out lookup is
/// indistinguishable from a miss to callers.
pub const UPSTREAM_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Read-only lookups against the federation.
///
/// Absent resources are `Ok(None)`; transport and decoding faults are `Err`.
/// Callers degrade both the same way and never retry.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Look up an entity in the federation directory.
    async fn entity(&self, entity_id: &str) -> Result<Option<Entity>, ResolveError>;

    /// Fetch a message from the entity's authoritative domain.
    async fn message(
        &self,
        domain: &str,
        entity_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, ResolveError>;

    /// Fetch a specific (e.g. override) profile from the entity's domain.
    async fn profile(
        &self,
        domain: &str,
        entity_id: &str,
        profile_id: &str,
    ) -> Result<Option<Profile>, ResolveError>;

    /// Fetch the entity's default profile via the well-known profile path.
    async fn default_profile(
        &self,
        domain: &str,
        entity_id: &str,
    ) -> Result<Option<Profile>, ResolveError>;
}

/// HTTP-backed [`Resolver`].
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    api_origin: String,
}

impl HttpResolver {
    /// Build a resolver against the given directory API origin.
    pub fn new(api_origin: &str) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_origin: api_origin.trim_end_matches('/').to_string(),
        })
    }

    fn entity_url(&self, entity_id: &str) -> String {
        format!("{}/v1/entities/{entity_id}", self.api_origin)
    }

    fn message_url(domain: &str, entity_id: &str, message_id: &str) -> String {
        format!("https://{domain}/v1/entities/{entity_id}/messages/{message_id}")
    }

    fn profile_url(domain: &str, entity_id: &str, profile_id: &str) -> String {
        format!("https://{domain}/v1/entities/{entity_id}/profiles/{profile_id}")
    }

    fn default_profile_url(domain: &str, entity_id: &str) -> String {
        format!("https://{domain}/v1/entities/{entity_id}/profile")
    }

    /// `GET` a JSON document, mapping 404 and empty bodies to `None`.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<Option<T>, ResolveError> {
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND
            || status == reqwest::StatusCode::NO_CONTENT
        {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.bytes().await?;
        if body.is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_slice(&body)?;
        Ok(Some(value))
    }
}

#[async_trait]
impl Resolver for HttpResolver {
    async fn entity(&self, entity_id: &str) -> Result<Option<Entity>, ResolveError> {
        self.get_optional(self.entity_url(entity_id)).await
    }

    async fn message(
        &self,
        domain: &str,
        entity_id: &str,
        message_id: &str,
    ) -> Result<Option<Message>, ResolveError> {
        self.get_optional(Self::message_url(domain, entity_id, message_id))
            .await
    }

    async fn profile(
        &self,
        domain: &str,
        entity_id: &str,
        profile_id: &str,
    ) -> Result<Option<Profile>, ResolveError> {
        self.get_optional(Self::profile_url(domain, entity_id, profile_id))
            .await
    }

    async fn default_profile(
        &self,
        domain: &str,
        entity_id: &str,
    ) -> Result<Option<Profile>, ResolveError> {
        self.get_optional(Self::default_profile_url(domain, entity_id))
            .await
    }
}
