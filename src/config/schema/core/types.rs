use super::super::{GatewayConfig, ObservabilityConfig, UpstreamConfig};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

pub(super) fn default_config_dir() -> PathBuf {
    UserDirs::new().map_or_else(
        || PathBuf::from(".streamrules"),
        |u| u.home_dir().join(".streamrules"),
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: default_config_dir().join("config.toml"),
            upstream: UpstreamConfig::default(),
            gateway: GatewayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}
