//! Configuration for the live avatar lookup and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AvatarConfig, Config, LoggingConfig};
