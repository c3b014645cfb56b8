use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, expansion or parsing
    /// fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the root URL is not http(s), a credential is
    /// empty, or the timeout cannot be parsed
    pub fn validate(&self) -> anyhow::Result<()> {
        let api = &self.api;

        if !matches!(api.root_url.scheme(), "http" | "https") {
            anyhow::bail!("api.root_url must use http or https, got '{}'", api.root_url.scheme());
        }

        if api.access_token.expose_secret().is_empty() {
            anyhow::bail!("api.access_token must not be empty");
        }

        if api.access_token_secret.expose_secret().is_empty() {
            anyhow::bail!("api.access_token_secret must not be empty");
        }

        if api.timeout()?.is_zero() {
            anyhow::bail!("api.timeout must be greater than 0");
        }

        Ok(())
    }
}
