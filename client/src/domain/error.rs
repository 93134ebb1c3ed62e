//! Classified request outcomes.
//!
//! These errors are transport agnostic: the HTTP adapter maps statuses and
//! error envelopes into them, and the dashboard shows their `Display` form on
//! the banner verbatim. Every variant is terminal for the triggering action
//! only — nothing is retried and no other page state is touched.

use thiserror::Error;

/// A request outcome classified into one of the named error kinds.
///
/// The `Display` form of each variant is the fixed user-facing banner
/// message; `Api` and `Transport` carry extra detail for tracing without
/// changing what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphSourceError {
    /// The token was rejected (API error code 190 or HTTP 401).
    #[error("Invalid or expired access token")]
    InvalidToken,
    /// The token lacks permission for the requested resource (HTTP 403).
    #[error("Permission denied")]
    PermissionDenied,
    /// The requested resource does not exist (HTTP 404).
    #[error("Resource not found")]
    NotFound,
    /// The service is throttling this token (HTTP 429).
    #[error("Too many requests please wait")]
    RateLimited,
    /// Any other API-level error; the server's message is surfaced verbatim.
    #[error("{message}")]
    Api {
        /// Message supplied by the API's error envelope.
        message: String,
    },
    /// Non-success HTTP status with no error envelope in the body.
    #[error("Request failed (status {status})")]
    Http {
        /// The HTTP status code received.
        status: u16,
    },
    /// Connection, DNS, body-read, or JSON-parse failure.
    #[error("Network error occurred")]
    Transport {
        /// Underlying failure detail, kept for tracing only.
        message: String,
    },
}

impl GraphSourceError {
    /// Helper for API-level errors carrying the server message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Helper for envelope-less HTTP failures.
    #[must_use]
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
