//! Errors produced by avatar lookups.

use thiserror::Error;

/// Why an avatar lookup failed.
///
/// The display string is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarError {
    /// The transport failed (connect, timeout, body read).
    #[error("{0}")]
    Network(String),

    /// Anything else: non-2xx responses, undecodable images.
    #[error("Sign Up Failed. Please try again.")]
    Unknown,
}

impl From<reqwest::Error> for AvatarError {
    fn from(err: reqwest::Error) -> Self {
        AvatarError::Network(err.to_string())
    }
}
