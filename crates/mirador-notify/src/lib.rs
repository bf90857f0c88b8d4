//! Mirador Notify - push notification formatting for federation events.
//!
//! This crate provides a small webhook worker that consumes the platform's
//! push payloads (schema-discriminated federation events), resolves the
//! acting user and target message, and dispatches one formatted native
//! notification payload per recognized event to a push gateway.
//!
//! # Degradation
//!
//! Formatting never fails outright. A profile lookup that misses falls back
//! to an anonymous placeholder name; a message lookup that misses leaves the
//! body empty; an unrecognized event schema is silently ignored. Nothing in
//! this pipeline retries.

pub mod config;
pub mod format;
pub mod routes;
pub mod sink;
pub mod state;

pub use config::Config;
pub use format::{Notification, format_event};
pub use routes::router;
pub use sink::{GatewaySink, NotificationSink};
pub use state::AppState;
