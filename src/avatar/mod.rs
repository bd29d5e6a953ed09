//! Avatar lookup capability.
//!
//! The sign-up loop only knows the [`AvatarLookup`] trait. The live
//! [`GravatarClient`] and the deterministic [`MockAvatarLookup`] are
//! interchangeable implementations injected at store construction.

mod error;
mod gravatar;
mod handle;
mod lookup;
mod mock;

pub use error::AvatarError;
pub use gravatar::GravatarClient;
pub use handle::Avatar;
pub use lookup::AvatarLookup;
pub use mock::MockAvatarLookup;
