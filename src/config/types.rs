use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub avatar: AvatarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the live Gravatar lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Base URL of the avatar service (default: "https://www.gravatar.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Requested image size in pixels (default: 256).
    #[serde(default = "default_size")]
    pub size: u32,
    /// Gravatar `d=` fallback; "404" turns missing avatars into errors.
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://www.gravatar.com".to_string()
}

fn default_size() -> u32 {
    256
}

fn default_fallback() -> String {
    "404".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            size: default_size(),
            fallback: default_fallback(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}
