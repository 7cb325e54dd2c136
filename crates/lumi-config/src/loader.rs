use std::path::Path;

use secrecy::ExposeSecret;

use crate::{AnyOrList, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse`] fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration text
    ///
    /// Expands `{{ env.VAR }}` placeholders, deserializes and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, TOML parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
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
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server()?;
        self.validate_upstream()?;
        self.validate_summarizer()?;
        self.validate_speech()?;
        self.validate_catalog()?;
        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        if self.server.upload_limit == 0 {
            anyhow::bail!("server.upload_limit must be greater than 0");
        }

        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        let cors = &self.server.cors;
        if cors.credentials {
            for (name, value) in [
                ("origins", &cors.origins),
                ("methods", &cors.methods),
                ("headers", &cors.headers),
            ] {
                if *value == AnyOrList::Any {
                    anyhow::bail!("server.cors.{name} must be an explicit list when server.cors.credentials is true");
                }
            }

            if cors.expose_headers.iter().any(|h| h == "*") {
                anyhow::bail!("server.cors.expose_headers must not contain '*' when server.cors.credentials is true");
            }
        }

        Ok(())
    }

    fn validate_upstream(&self) -> anyhow::Result<()> {
        if self.upstream.timeout_duration()?.is_zero() {
            anyhow::bail!("upstream.timeout must be greater than 0");
        }
        self.upstream.connect_timeout_duration()?;
        Ok(())
    }

    fn validate_summarizer(&self) -> anyhow::Result<()> {
        if self.summarizer.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("summarizer.api_key must not be empty");
        }

        if self.summarizer.model.trim().is_empty() {
            anyhow::bail!("summarizer.model must not be empty");
        }

        Ok(())
    }

    fn validate_speech(&self) -> anyhow::Result<()> {
        if self.speech.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("speech.api_key must not be empty");
        }

        if self.speech.voice_id.trim().is_empty() {
            anyhow::bail!("speech.voice_id must not be empty");
        }

        for (name, value) in [
            ("stability", self.speech.stability),
            ("similarity_boost", self.speech.similarity_boost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("speech.{name} must be between 0.0 and 1.0, got {value}");
            }
        }

        Ok(())
    }

    fn validate_catalog(&self) -> anyhow::Result<()> {
        if self.catalog.search_limit == 0 {
            anyhow::bail!("catalog.search_limit must be greater than 0");
        }
        Ok(())
    }
}
