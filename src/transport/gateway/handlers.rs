use crate::rules::{AddRulesBody, DeleteRulesBody};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::AppState;

/// Empty-bodied 500. Upstream status and detail never reach the caller.
fn failure_response() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

fn outcome_response<T: Serialize, E: std::fmt::Display>(
    route: &'static str,
    outcome: Result<T, E>,
) -> Response {
    match outcome {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            tracing::warn!(route, error = %error, "rule operation failed");
            failure_response()
        }
    }
}

fn parse_body<T: DeserializeOwned>(route: &'static str, body: &Bytes) -> Option<T> {
    match serde_json::from_slice(body) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::warn!(route, error = %error, "rejected unparseable request body");
            None
        }
    }
}

/// GET /health: readiness probe, no upstream call
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /rules
pub(super) async fn handle_list_rules(State(state): State<AppState>) -> Response {
    outcome_response("GET /rules", state.rules.list().await)
}

/// POST /rules/add
pub(super) async fn handle_add_rules(State(state): State<AppState>, body: Bytes) -> Response {
    let route = "POST /rules/add";
    let Some(request) = parse_body::<AddRulesBody>(route, &body) else {
        return failure_response();
    };
    outcome_response(route, state.rules.add(&request.data).await)
}

/// POST /rules/delete
pub(super) async fn handle_delete_rules(State(state): State<AppState>, body: Bytes) -> Response {
    let route = "POST /rules/delete";
    let Some(request) = parse_body::<DeleteRulesBody>(route, &body) else {
        return failure_response();
    };
    outcome_response(route, state.rules.delete(&request.data).await)
}
