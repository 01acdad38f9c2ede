//! Error types for the notes client.

use serde::Deserialize;
use thiserror::Error;

/// A failed call to the notes service.
///
/// Network failures, 4xx and 5xx responses all end up here; callers do not
/// distinguish between them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("no user is loaded yet")]
    MissingUser,

    #[error("the request was interrupted before it finished")]
    Interrupted,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// Uses the `message` field of a JSON body when present, otherwise the raw
    /// body, otherwise the canonical reason for the status.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string(),
        };
        ApiError::Status { status, message }
    }

    /// Text suitable for showing next to a form.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Identity resolution gave up.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("could not resolve a user after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: ApiError,
    },
}

/// Startup failed before the shell had a user and notes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("could not load notes: {0}")]
    Notes(#[from] ApiError),
}
