//! Error types for remote resolution.

use thiserror::Error;

/// Errors from the remote resolution client.
///
/// A missing resource is *not* an error; lookups return `Ok(None)` for
/// absent entities, messages, and profiles. These variants cover transport
/// and decoding faults, which callers degrade the same way as a miss but
/// keep distinguishable for diagnostics.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Network failure, including the per-request timeout.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success, non-404 status.
    #[error("upstream returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The request URL.
        url: String,
    },

    /// The response body could not be decoded as the expected document.
    #[error("malformed upstream document: {0}")]
    Decode(#[from] serde_json::Error),
}
