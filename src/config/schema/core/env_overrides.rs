use super::Config;

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(base_url) = non_empty_var("STREAMRULES_BASE_URL") {
            self.upstream.base_url = base_url;
        }

        if let Some(rules_path) = non_empty_var("STREAMRULES_RULES_PATH") {
            self.upstream.rules_path = rules_path;
        }

        if let Some(oauth_path) = non_empty_var("STREAMRULES_OAUTH_PATH") {
            self.upstream.oauth_path = oauth_path;
        }

        if let Some(credential) = non_empty_var("STREAMRULES_BEARER_CREDENTIAL")
            .or_else(|| non_empty_var("TWITTER_BEARER_TOKEN"))
        {
            self.upstream.bearer_credential = credential;
        }

        if let Some(port_str) =
            non_empty_var("STREAMRULES_GATEWAY_PORT").or_else(|| non_empty_var("PORT"))
            && let Ok(port) = port_str.trim().parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Some(host) =
            non_empty_var("STREAMRULES_GATEWAY_HOST").or_else(|| non_empty_var("HOST"))
        {
            self.gateway.host = host;
        }

        if let Some(level) = non_empty_var("STREAMRULES_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }
}
