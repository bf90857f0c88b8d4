//! Mirador Preview - Static HTML preview pages for Mirador messages.
//!
//! This crate provides a lightweight HTTP server that renders static HTML
//! preview documents carrying Open Graph / Twitter Card metadata for any
//! `/{entity_id}/{message_id}` URL, then redirects the browser to the
//! canonical app route. It is designed to be placed behind a CDN for edge
//! caching.
//!
//! # Architecture
//!
//! - **Resolve**: Looks the entity up in the federation directory, then
//!   fetches the message and its effective profile from the entity's
//!   authoritative domain
//! - **Render**: Hand-assembles the OG document; every dynamic value passes
//!   through the sanitizer
//! - **Cache**: In-process moka cache behind an injected key-value seam, plus
//!   `Cache-Control` headers for CDN caching
//!
//! # Failure semantics
//!
//! Every miss (malformed path, unknown entity, missing message, missing
//! profile, upstream fault) degrades to a `301` redirect to the platform
//! home. No partial content, no retries, no error pages.

pub mod cache;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
