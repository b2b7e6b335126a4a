//! Axum-based HTTP gateway exposing the stream rules operations.
//!
//! - `GET /rules`, `POST /rules/add`, `POST /rules/delete`
//! - `GET /health` readiness probe
//! - Request body size limit (64KB) and request timeout (30s)
//! - Every failure is a bare 500; upstream detail stays in the logs

mod handlers;
mod server;

pub use server::{build_app, run_gateway, run_gateway_with_listener};

use crate::rules::RuleService;
use std::sync::Arc;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RuleService>,
}
