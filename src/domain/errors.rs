//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Bad, expired or unauthorized API credential.
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Unknown channel, or deleted/private video.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connectivity failure, timeout or server-side (5xx) error.
    #[error("Network error: {0}")]
    TransientNetwork(String),

    /// Payload did not match the expected API shape.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Any other non-success API status.
    #[error("YouTube API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Render failed: {0}")]
    Render(String),
}
