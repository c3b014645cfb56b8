use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Public API root of the `is1a` zone
pub const DEFAULT_ROOT_URL: &str = "https://secure.sakura.ad.jp/cloud/zone/is1a/api/cloud/1.0/";

/// API endpoint and credentials
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// API root all endpoint paths are resolved against
    #[serde(default = "default_root_url")]
    pub root_url: Url,
    /// Access token, sent as the basic auth user
    pub access_token: SecretString,
    /// Access token secret, sent as the basic auth password
    pub access_token_secret: SecretString,
    /// Per-request timeout (e.g. `30s`, `1m`)
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Override for the `User-Agent` header
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ApiConfig {
    /// Parsed request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the duration string is invalid
    pub fn timeout(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid api.timeout '{}': {e}", self.timeout))
    }
}

fn default_root_url() -> Url {
    Url::parse(DEFAULT_ROOT_URL).expect("default root URL must be valid")
}

fn default_timeout() -> String {
    "30s".to_owned()
}
