//! Live avatar lookup against the Gravatar HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::AvatarConfig;

use super::error::AvatarError;
use super::handle::Avatar;
use super::lookup::AvatarLookup;

/// Gravatar-backed [`AvatarLookup`].
///
/// Requests `{base_url}/avatar/{md5(lowercase email)}?s={size}&d={fallback}`.
/// With the default `d=404`, emails without a registered avatar come back
/// as a non-2xx response and are reported as [`AvatarError::Unknown`].
pub struct GravatarClient {
    client: Client,
    base_url: String,
    size: u32,
    fallback: String,
}

impl GravatarClient {
    pub fn new(config: &AvatarConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            size: config.size,
            fallback: config.fallback.clone(),
        })
    }

    pub fn avatar_url(&self, email: &str) -> String {
        format!(
            "{}/avatar/{}?s={}&d={}",
            self.base_url,
            email_hash(email),
            self.size,
            self.fallback
        )
    }
}

/// Hex MD5 of the lowercased email, as Gravatar keys avatars.
pub(crate) fn email_hash(email: &str) -> String {
    format!("{:x}", md5::compute(email.to_lowercase().as_bytes()))
}

#[async_trait]
impl AvatarLookup for GravatarClient {
    fn name(&self) -> &'static str {
        "gravatar"
    }

    async fn lookup_avatar(&self, email: &str) -> Result<Avatar, AvatarError> {
        let url = self.avatar_url(email);
        tracing::debug!(%url, "fetching avatar");

        let response = self.client.get(&url).send().await.map_err(|err| {
            tracing::warn!(error = %err, "avatar request failed");
            AvatarError::from(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "avatar lookup rejected");
            return Err(AvatarError::Unknown);
        }

        let bytes = response.bytes().await?;
        Avatar::decode(&bytes)
    }
}
