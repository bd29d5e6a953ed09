//! Deterministic lookup doubles.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::AvatarError;
use super::handle::Avatar;
use super::lookup::AvatarLookup;

/// Size of the placeholder returned by [`MockAvatarLookup::success`].
const PLACEHOLDER_SIZE: u32 = 100;

/// Lookup that resolves immediately with a fixed result.
///
/// Records the email of every call so tests can assert how often the
/// capability was invoked.
pub struct MockAvatarLookup {
    result: Result<Avatar, AvatarError>,
    emails: Mutex<Vec<String>>,
}

impl MockAvatarLookup {
    pub fn returning(result: Result<Avatar, AvatarError>) -> Self {
        Self {
            result,
            emails: Mutex::new(Vec::new()),
        }
    }

    /// Always succeeds with a placeholder avatar.
    pub fn success() -> Self {
        Self::returning(Ok(Avatar::placeholder(PLACEHOLDER_SIZE)))
    }

    /// Always fails with `error`.
    pub fn failure(error: AvatarError) -> Self {
        Self::returning(Err(error))
    }

    pub fn calls(&self) -> usize {
        self.emails.lock().len()
    }

    /// Emails passed to the lookup, oldest first.
    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().clone()
    }
}

#[async_trait]
impl AvatarLookup for MockAvatarLookup {
    fn name(&self) -> &'static str {
        match self.result {
            Ok(_) => "mock-success",
            Err(_) => "mock-failure",
        }
    }

    async fn lookup_avatar(&self, email: &str) -> Result<Avatar, AvatarError> {
        self.emails.lock().push(email.to_string());
        self.result.clone()
    }
}
