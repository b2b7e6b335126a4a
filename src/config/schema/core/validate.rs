use super::Config;
use crate::error::ConfigError;
use url::Url;

impl Config {
    /// Check everything a rule operation needs before any upstream call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.upstream.base_url.trim();
        let parsed = Url::parse(base_url).map_err(|e| {
            ConfigError::Validation(format!("upstream.base_url '{base_url}' is not a URL: {e}"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "upstream.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        for (name, path) in [
            ("upstream.rules_path", &self.upstream.rules_path),
            ("upstream.oauth_path", &self.upstream.oauth_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{name} must start with '/', got '{path}'"
                )));
            }
        }

        if self.upstream.bearer_credential.trim().is_empty() {
            return Err(ConfigError::Validation(
                "upstream.bearer_credential is empty; set it in config.toml or \
                 STREAMRULES_BEARER_CREDENTIAL"
                    .into(),
            ));
        }

        if self.observability.level().is_none() {
            return Err(ConfigError::Validation(format!(
                "observability.log_level '{}' is not one of trace, debug, info, warn, error",
                self.observability.log_level
            )));
        }

        Ok(())
    }
}
