use crate::config::UpstreamConfig;
use reqwest::Client;
use std::time::Duration;

/// Shared client for token and rules calls. Timeouts come from config; there is
/// no retry layer.
pub fn build_upstream_client(config: &UpstreamConfig) -> Client {
    build_upstream_client_with_timeouts(config.request_timeout_secs, config.connect_timeout_secs)
}

pub fn build_upstream_client_with_timeouts(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
