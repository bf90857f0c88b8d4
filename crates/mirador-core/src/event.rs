//! Inbound federation events.
//!
//! The push surface delivers one JSON document per notification-worthy action
//! on the network. Documents are discriminated by their `schema` field; kinds
//! this service does not recognize deserialize to [`FederationEvent::Unknown`]
//! and are silently ignored rather than rejected.

use serde::Deserialize;

/// A notification-worthy action from the distributed network.
///
/// `signer` is the acting entity; `target`/`owner` identify the affected
/// message and the entity that owns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "schema", rename_all = "snake_case")]
pub enum FederationEvent {
    /// Someone liked one of your messages.
    Like {
        /// Acting entity id.
        signer: String,
        /// Affected message id.
        target: String,
        /// Entity that owns the affected message.
        owner: String,
    },

    /// Someone reacted to one of your messages with an emoji shortcode.
    Reaction {
        signer: String,
        target: String,
        owner: String,
        /// Reaction shortcode, without colons.
        shortcode: String,
        /// Custom reaction image, if the shortcode names one.
        #[serde(default, rename = "imageURL")]
        image_url: Option<String>,
    },

    /// Someone rerouted (re-shared) one of your messages.
    Reroute {
        signer: String,
        target: String,
        owner: String,
    },

    /// Someone replied to one of your messages. The reply carries its own
    /// reference to the message it responds to, distinct from `target`/`owner`.
    Reply {
        signer: String,
        target: String,
        owner: String,
        /// The replied-to message id (the reply's own reference).
        #[serde(rename = "messageId")]
        message_id: String,
        /// Entity that authored the replied-to message.
        #[serde(rename = "messageAuthor")]
        message_author: String,
    },

    /// Someone mentioned you in a message.
    Mention {
        signer: String,
        target: String,
        owner: String,
        #[serde(rename = "messageId")]
        message_id: String,
        #[serde(rename = "messageAuthor")]
        message_author: String,
    },

    /// Someone asked to view your private timeline.
    ReadAccessRequest {
        signer: String,
    },

    /// Any schema this service does not handle. Not an error.
    #[serde(other)]
    Unknown,
}

impl FederationEvent {
    /// The acting entity id, if the event kind carries one.
    pub fn signer(&self) -> Option<&str> {
        match self {
            Self::Like { signer, .. }
            | Self::Reaction { signer, .. }
            | Self::Reroute { signer, .. }
            | Self::Reply { signer, .. }
            | Self::Mention { signer, .. }
            | Self::ReadAccessRequest { signer } => Some(signer),
            Self::Unknown => None,
        }
    }
}
