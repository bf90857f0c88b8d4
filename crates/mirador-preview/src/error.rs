//! Error types for the preview service.
//!
//! Every failure in the resolution chain renders externally as the same
//! `301` redirect to the platform home; the variants exist so logs can tell
//! a missing resource from an upstream fault.

use mirador_core::ResolveError;

/// Preview resolution error.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The entity is not in the federation directory.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// The entity's domain does not have the requested message.
    #[error("missing message: {0}")]
    MissingMessage(String),

    /// Neither the override profile nor the default profile resolved.
    #[error("missing profile for entity {0}")]
    MissingProfile(String),

    /// Transport or decoding fault from an upstream lookup.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
