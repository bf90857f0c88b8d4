//! Federation event to notification payload transformation.
//!
//! One handler per event kind. Every sub-resolution is wrapped so a failure
//! only blanks the piece of the payload it would have filled: the username
//! falls back to the configured anonymous label, the body stays empty, icon
//! and badge stay unset. Failures are logged and never reach the dispatch
//! call.

use mirador_core::{FederationEvent, Resolver};

use crate::config::Config;

/// Pixel size requested from the image proxy for notification icons.
const ICON_SIZE: u32 = 192;

/// Pixel size requested from the image proxy for notification badges.
const BADGE_SIZE: u32 = 96;

/// A native notification payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    /// Headline, always present for recognized events.
    pub title: String,
    /// Supporting text; empty when the message lookup degraded.
    pub body: String,
    /// Large image URL (acting user's avatar, proxied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Small monochrome-slot image URL (reaction image, proxied).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// The acting user's resolved display identity.
struct SignerIdentity {
    name: String,
    avatar: Option<String>,
}

/// Transform one inbound federation event into a notification payload.
///
/// Returns `None` for event schemas this service does not recognize; that is
/// a silent ignore, not an error.
pub async fn format_event(
    resolver: &dyn Resolver,
    config: &Config,
    event: &FederationEvent,
) -> Option<Notification> {
    let signer_id = event.signer()?;
    let signer = signer_identity(resolver, config, signer_id).await;

    let notification = match event {
        FederationEvent::Like { target, owner, .. } => Notification {
            title: format!("{} liked your message", signer.name),
            body: message_text(resolver, owner, target).await,
            ..Default::default()
        },

        FederationEvent::Reaction {
            target,
            owner,
            shortcode,
            image_url,
            ..
        } => Notification {
            title: format!("{} reacted to your message with :{shortcode}:", signer.name),
            body: message_text(resolver, owner, target).await,
            badge: image_url
                .as_deref()
                .and_then(|u| proxied_image(config, u, BADGE_SIZE)),
            ..Default::default()
        },

        FederationEvent::Reroute { target, owner, .. } => Notification {
            title: format!("{} rerouted your message", signer.name),
            body: message_text(resolver, owner, target).await,
            ..Default::default()
        },

        // The reply carries its own reference to the message it responds to;
        // the body comes from that reference, not from target/owner.
        FederationEvent::Reply {
            message_id,
            message_author,
            ..
        } => Notification {
            title: format!("{} replied to your message", signer.name),
            body: message_text(resolver, message_author, message_id).await,
            icon: signer
                .avatar
                .as_deref()
                .and_then(|u| proxied_image(config, u, ICON_SIZE)),
            ..Default::default()
        },

        FederationEvent::Mention { target, owner, .. } => Notification {
            title: format!("{} mentioned you", signer.name),
            body: message_text(resolver, owner, target).await,
            icon: signer
                .avatar
                .as_deref()
                .and_then(|u| proxied_image(config, u, ICON_SIZE)),
            ..Default::default()
        },

        FederationEvent::ReadAccessRequest { .. } => Notification {
            title: format!("{} requested to view your timeline", signer.name),
            ..Default::default()
        },

        FederationEvent::Unknown => return None,
    };

    Some(notification)
}

/// Resolve the acting user's display identity.
///
/// Entity lookup, then the default profile on the entity's domain. Any miss
/// or fault along the way degrades to the anonymous label.
async fn signer_identity(
    resolver: &dyn Resolver,
    config: &Config,
    signer_id: &str,
) -> SignerIdentity {
    let profile = async {
        let entity = resolver.entity(signer_id).await.ok().flatten()?;
        resolver
            .default_profile(&entity.domain, signer_id)
            .await
            .ok()
            .flatten()
    }
    .await;

    match profile {
        Some(profile) => SignerIdentity {
            name: profile
                .username
                .unwrap_or_else(|| config.anonymous_label.clone()),
            avatar: profile.avatar,
        },
        None => {
            tracing::warn!(signer = %signer_id, "signer profile unresolved, using anonymous label");
            SignerIdentity {
                name: config.anonymous_label.clone(),
                avatar: None,
            }
        }
    }
}

/// Fetch a message's body text, degrading to an empty string.
async fn message_text(resolver: &dyn Resolver, owner_id: &str, message_id: &str) -> String {
    let text = async {
        let entity = resolver.entity(owner_id).await.ok().flatten()?;
        let message = resolver
            .message(&entity.domain, owner_id, message_id)
            .await
            .ok()
            .flatten()?;
        Some(message.document.body)
    }
    .await;

    match text {
        Some(body) => body,
        None => {
            tracing::warn!(owner = %owner_id, message = %message_id, "target message unresolved, leaving body empty");
            String::new()
        }
    }
}

/// Build a sizing image-proxy URL for a remote image.
fn proxied_image(config: &Config, image_url: &str, size: u32) -> Option<String> {
    let mut proxied = url::Url::parse(&format!("{}/fetch", config.image_proxy_origin)).ok()?;
    proxied
        .query_pairs_mut()
        .append_pair("size", &size.to_string())
        .append_pair("url", image_url);
    Some(proxied.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use mirador_core::ResolveError;
    use mirador_core::model::{Entity, Message, MessageDocument, Profile};

    /// Resolver double: entities and messages are keyed by id; a listed id
    /// with no value simulates a fault rather than a miss.
    #[derive(Default)]
    struct FakeResolver {
        entities: HashMap<String, Entity>,
        messages: HashMap<String, Message>,
        profiles: HashMap<String, Profile>,
        fail_all_messages: bool,
    }

    #[async_trait]
    impl Resolver for FakeResolver {
        async fn entity(&self, entity_id: &str) -> Result<Option<Entity>, ResolveError> {
            Ok(self.entities.get(entity_id).cloned())
        }

        async fn message(
            &self,
            _domain: &str,
            _entity_id: &str,
            message_id: &str,
        ) -> Result<Option<Message>, ResolveError> {
            if self.fail_all_messages {
                return Err(ResolveError::Status {
                    status: 500,
                    url: "https://host.example".to_string(),
                });
            }
            Ok(self.messages.get(message_id).cloned())
        }

        async fn profile(
            &self,
            _domain: &str,
            _entity_id: &str,
            _profile_id: &str,
        ) -> Result<Option<Profile>, ResolveError> {
            Ok(None)
        }

        async fn default_profile(
            &self,
            _domain: &str,
            entity_id: &str,
        ) -> Result<Option<Profile>, ResolveError> {
            Ok(self.profiles.get(entity_id).cloned())
        }
    }

    fn config() -> Config {
        Config {
            bind_addr: "0.0.0.0:0".to_string(),
            api_origin: "https://dir.example".to_string(),
            image_proxy_origin: "https://img.example".to_string(),
            gateway_url: "http://localhost:9000/notify".to_string(),
            anonymous_label: "Private user".to_string(),
        }
    }

    fn entity(id: &str) -> Entity {
        Entity {
            id: id.to_string(),
            domain: "host.example".to_string(),
        }
    }

    fn message(id: &str, body: &str) -> Message {
        Message {
            id: id.to_string(),
            author_id: "author".to_string(),
            document: MessageDocument {
                body: body.to_string(),
                ..Default::default()
            },
        }
    }

    fn profile(name: &str, avatar: Option<&str>) -> Profile {
        Profile {
            username: Some(name.to_string()),
            avatar: avatar.map(str::to_string),
        }
    }

    fn resolver_with(signer_name: &str) -> FakeResolver {
        let mut resolver = FakeResolver::default();
        resolver.entities.insert("s1".to_string(), entity("s1"));
        resolver.entities.insert("o1".to_string(), entity("o1"));
        resolver
            .profiles
            .insert("s1".to_string(), profile(signer_name, Some("https://host.example/pic.png")));
        resolver
            .messages
            .insert("m1".to_string(), message("m1", "the target text"));
        resolver
    }

    #[tokio::test]
    async fn like_formats_title_and_body() {
        let resolver = resolver_with("alice");
        let event = FederationEvent::Like {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "alice liked your message");
        assert_eq!(n.body, "the target text");
        assert_eq!(n.icon, None);
        assert_eq!(n.badge, None);
    }

    #[tokio::test]
    async fn reaction_includes_shortcode_and_badge() {
        let resolver = resolver_with("bob");
        let event = FederationEvent::Reaction {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
            shortcode: "tada".to_string(),
            image_url: Some("https://host.example/tada.png".to_string()),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "bob reacted to your message with :tada:");
        assert_eq!(n.body, "the target text");
        let badge = n.badge.unwrap();
        assert!(badge.starts_with("https://img.example/fetch?"));
        assert!(badge.contains("size=96"));
        assert!(badge.contains("tada.png"));
    }

    #[tokio::test]
    async fn reaction_without_image_has_no_badge() {
        let resolver = resolver_with("bob");
        let event = FederationEvent::Reaction {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
            shortcode: "+1".to_string(),
            image_url: None,
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.badge, None);
    }

    #[tokio::test]
    async fn reroute_formats_title() {
        let resolver = resolver_with("carol");
        let event = FederationEvent::Reroute {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "carol rerouted your message");
        assert_eq!(n.body, "the target text");
    }

    #[tokio::test]
    async fn reply_body_comes_from_its_own_reference() {
        let mut resolver = resolver_with("dave");
        resolver.entities.insert("a0".to_string(), entity("a0"));
        resolver
            .messages
            .insert("m0".to_string(), message("m0", "the replied-to text"));

        let event = FederationEvent::Reply {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
            message_id: "m0".to_string(),
            message_author: "a0".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "dave replied to your message");
        assert_eq!(n.body, "the replied-to text");
        let icon = n.icon.unwrap();
        assert!(icon.contains("size=192"));
        assert!(icon.contains("pic.png"));
    }

    #[tokio::test]
    async fn mention_uses_target_text_and_avatar_icon() {
        let resolver = resolver_with("erin");
        let event = FederationEvent::Mention {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
            message_id: "m0".to_string(),
            message_author: "a0".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "erin mentioned you");
        assert_eq!(n.body, "the target text");
        assert!(n.icon.is_some());
    }

    #[tokio::test]
    async fn read_access_request_has_no_body() {
        let resolver = resolver_with("frank");
        let event = FederationEvent::ReadAccessRequest {
            signer: "s1".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "frank requested to view your timeline");
        assert_eq!(n.body, "");
    }

    #[tokio::test]
    async fn unknown_schema_is_ignored() {
        let resolver = resolver_with("gail");
        let n = format_event(&resolver, &config(), &FederationEvent::Unknown).await;
        assert!(n.is_none());
    }

    #[tokio::test]
    async fn failed_fetches_degrade_not_abort() {
        // Profile resolution and message resolution both fail: the title
        // still renders with the anonymous label and the body stays empty.
        let resolver = FakeResolver {
            fail_all_messages: true,
            ..Default::default()
        };
        let event = FederationEvent::Reaction {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
            shortcode: "fire".to_string(),
            image_url: None,
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "Private user reacted to your message with :fire:");
        assert_eq!(n.body, "");
    }

    #[tokio::test]
    async fn profile_without_username_uses_anonymous_label() {
        let mut resolver = resolver_with("unused");
        resolver
            .profiles
            .insert("s1".to_string(), Profile::default());

        let event = FederationEvent::Like {
            signer: "s1".to_string(),
            target: "m1".to_string(),
            owner: "o1".to_string(),
        };

        let n = format_event(&resolver, &config(), &event).await.unwrap();
        assert_eq!(n.title, "Private user liked your message");
    }

    #[test]
    fn proxied_image_encodes_the_source_url() {
        let url = proxied_image(&config(), "https://host.example/a b.png", 96).unwrap();
        assert!(url.starts_with("https://img.example/fetch?size=96&url="));
        assert!(!url.contains(' '));
    }
}
