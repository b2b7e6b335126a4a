use super::handlers::{handle_add_rules, handle_delete_rules, handle_health, handle_list_rules};
use super::{AppState, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};

use crate::config::Config;
use crate::rules::RuleService;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the HTTP gateway using axum.
pub async fn run_gateway(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    if is_public_bind(host) && !config.gateway.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind to {host}: the rules proxy would be reachable from the network.\n\
             Fix: use --host 127.0.0.1 (default) or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let listener = bind_listener(host, port).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Bind a host name, an IPv4 address, or a bare or bracketed IPv6 address.
async fn bind_listener(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let bind_host = host.trim_matches(&['[', ']'][..]);
    tokio::net::TcpListener::bind((bind_host, port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{port}"))
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get gateway listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let state = AppState {
        rules: Arc::new(RuleService::from_config(&config.upstream)),
    };

    tracing::info!(
        addr = %display_addr,
        upstream = %config.upstream.base_url,
        "stream rules gateway listening"
    );
    print_gateway_banner(&display_addr);

    let app = build_app(state);
    axum::serve(listener, app)
        .await
        .context("serve HTTP gateway")?;

    Ok(())
}

fn print_gateway_banner(display_addr: &str) {
    println!("Gateway listening on {display_addr}");
    println!("  GET  /rules");
    println!("  POST /rules/add");
    println!("  POST /rules/delete");
    println!("  GET  /health");
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/rules", get(handle_list_rules))
        .route("/rules/add", post(handle_add_rules))
        .route("/rules/delete", post(handle_delete_rules))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}
