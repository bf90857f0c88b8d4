//! Core types and shared utilities for the Mirador companion services.
//!
//! This crate provides:
//! - The read-only federation data model (entities, messages, profiles,
//!   media attachments) as fetched from remote domains
//! - The schema-tagged federation event union consumed by the notifier
//! - Content extraction (inline image syntax, flagged attachments)
//! - HTML/JS escaping for hand-assembled preview documents
//! - The remote resolution client used by both services

pub mod error;
pub mod event;
pub mod extract;
pub mod model;
pub mod resolve;
pub mod sanitize;

pub use error::ResolveError;
pub use event::FederationEvent;
pub use model::{Entity, MediaAttachment, Message, MessageDocument, Profile, ProfileRef};
pub use resolve::{HttpResolver, Resolver};
