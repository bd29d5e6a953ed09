//! The injectable lookup capability.

use async_trait::async_trait;

use super::error::AvatarError;
use super::handle::Avatar;

/// Fetches the avatar registered for an email address.
///
/// Implementations must not panic on bad input: every failure is
/// reported as an [`AvatarError`].
#[async_trait]
pub trait AvatarLookup: Send + Sync {
    /// Returns the name of this implementation for logging.
    fn name(&self) -> &'static str;

    async fn lookup_avatar(&self, email: &str) -> Result<Avatar, AvatarError>;
}
