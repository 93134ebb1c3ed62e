//! Access token input validation.
//!
//! The token is supplied directly by the user and is never persisted; the
//! only lifecycle it has is the current input's value. Validation happens
//! before any request is issued, so malformed tokens never reach the network.

use std::fmt;

use thiserror::Error;

/// Validation failures for raw token input.
///
/// The `Display` form of each variant is the exact banner message shown to
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenValidationError {
    /// Input is empty after trimming whitespace.
    #[error("Please provide an access token to fetch data")]
    Empty,
    /// Trimmed input is shorter than [`AccessToken::MIN_LENGTH`].
    #[error("Invalid access token format")]
    TooShort,
}

/// Validated access token.
///
/// Invariant: the held value is trimmed, non-empty, and at least
/// [`AccessToken::MIN_LENGTH`] characters long.
///
/// # Examples
/// ```
/// use client::domain::AccessToken;
///
/// let token = AccessToken::new("  EAAB1234567890  ").expect("valid token");
/// assert_eq!(token.as_str(), "EAAB1234567890");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Minimum accepted length of a trimmed token, in characters.
    pub const MIN_LENGTH: usize = 10;

    /// Trim and validate raw token input.
    ///
    /// # Errors
    ///
    /// Returns [`TokenValidationError::Empty`] when the trimmed input is
    /// empty, or [`TokenValidationError::TooShort`] when it is shorter than
    /// [`AccessToken::MIN_LENGTH`] characters.
    pub fn new(raw: &str) -> Result<Self, TokenValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenValidationError::Empty);
        }
        if trimmed.chars().count() < Self::MIN_LENGTH {
            return Err(TokenValidationError::TooShort);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// The token is a credential; keep it out of debug output and logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}
