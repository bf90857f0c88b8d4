//! The federation data model.
//!
//! Every type here is a read-only snapshot of a remote document, fetched at
//! request time and discarded once the response or notification has been
//! emitted. Nothing is mutated after fetch and nothing is persisted locally.

use serde::Deserialize;

/// An account identity in the federation directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Stable account identifier.
    pub id: String,
    /// Hostname currently serving this account's content. Authoritative:
    /// message and profile lookups for this account go to this domain,
    /// never to the local origin.
    pub domain: String,
}

/// A signed content document (post) authored by an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: String,
    /// Authoring entity id.
    #[serde(rename = "authorId")]
    pub author_id: String,
    /// The nested, schema-tagged payload.
    pub document: MessageDocument,
}

/// The renderable payload of a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageDocument {
    /// Payload schema tag (e.g. "post/v1"). Informational here.
    #[serde(default)]
    pub schema: String,
    /// Renderable body text (markdown-like).
    #[serde(default)]
    pub body: String,
    /// Media attached to the message, in attachment order.
    #[serde(default)]
    pub attachments: Vec<MediaAttachment>,
    /// Alias-posting pointer: display this profile instead of the author's
    /// default one.
    #[serde(default, rename = "profileOverride")]
    pub profile_override: Option<ProfileRef>,
}

/// A per-message pointer to an alternate display profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRef {
    /// Identifier of the profile to display.
    #[serde(rename = "profileId")]
    pub profile_id: String,
}

/// One media attachment of a message.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
    /// MIME-like type string (e.g. "image/jpeg").
    #[serde(rename = "mediaType")]
    pub media_type: String,
    /// Where the media lives.
    #[serde(rename = "mediaURL")]
    pub media_url: String,
    /// Content-warning label. Flagged attachments are excluded from public
    /// preview image lists and only counted.
    #[serde(default)]
    pub flag: Option<String>,
}

impl MediaAttachment {
    /// Whether this attachment is an image of any subtype.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image")
    }

    /// Whether this attachment carries a content-warning flag.
    pub fn is_flagged(&self) -> bool {
        self.flag.as_deref().is_some_and(|f| !f.is_empty())
    }
}

/// Display identity for an entity or a profile-override target.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    /// Display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Profile {
    /// The best display name available.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Anonymous")
    }
}
