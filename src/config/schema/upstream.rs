use serde::{Deserialize, Serialize};

/// Upstream provider endpoints and the static client credential.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Provider base URL (default: `https://api.twitter.com`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Filtered stream rules path, appended to `base_url`
    #[serde(default = "default_rules_path")]
    pub rules_path: String,
    /// Client-credentials token path, appended to `base_url`
    #[serde(default = "default_oauth_path")]
    pub oauth_path: String,
    /// Basic credential sent to the token endpoint. Never sent to the rules endpoint.
    #[serde(default)]
    pub bearer_credential: String,
    /// Whole-request timeout for upstream calls (default: 30)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Connect timeout for upstream calls (default: 10)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.twitter.com".into()
}

fn default_rules_path() -> String {
    "/2/tweets/search/stream/rules".into()
}

fn default_oauth_path() -> String {
    "/oauth2/token?grant_type=client_credentials".into()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl UpstreamConfig {
    pub fn rules_url(&self) -> String {
        join_url(&self.base_url, &self.rules_path)
    }

    pub fn oauth_url(&self) -> String {
        join_url(&self.base_url, &self.oauth_path)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            rules_path: default_rules_path(),
            oauth_path: default_oauth_path(),
            bearer_credential: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("rules_path", &self.rules_path)
            .field("oauth_path", &self.oauth_path)
            .field("bearer_credential", &"[REDACTED]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
