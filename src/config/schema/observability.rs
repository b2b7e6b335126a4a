use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl ObservabilityConfig {
    pub fn level(&self) -> Option<Level> {
        Level::from_str(self.log_level.trim()).ok()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}
