//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum KnobzError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors raised while talking to the Consul agent.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Timeout")]
    Timeout,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Client error {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },
}

impl HttpError {
    /// The HTTP status returned by the agent, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Timeout => None,
            HttpError::NotFound(_) => Some(404),
            HttpError::Forbidden(_) => Some(403),
            HttpError::RateLimited => Some(429),
            HttpError::BadRequest { status, .. } | HttpError::ServerError { status, .. } => {
                Some(*status)
            }
        }
    }
}

/// Why a KV value could not be turned into feature fields.
///
/// Never surfaced by `fetch_features`: an entry that fails to decode yields
/// a record holding only its `id`.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("value is not a string")]
    NotAString,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
