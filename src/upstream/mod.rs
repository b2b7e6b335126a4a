//! Client side of the provider: client-credentials token exchange and the
//! filtered stream rules endpoint.

pub mod http_client;
pub mod rules;
pub mod token;
pub mod types;

pub use http_client::build_upstream_client;
pub use rules::RuleGateway;
pub use token::{Token, TokenProvider};
pub use types::{
    AddRulesResponse, CreatedRule, DeleteRulesResponse, ListRulesResponse, RuleError, RuleRecord,
};

use crate::error::{Endpoint, UpstreamError};
use serde::de::DeserializeOwned;

/// Turn a sent request into a decoded body, classifying every failure.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    sent: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, UpstreamError> {
    let response = sent.map_err(|source| UpstreamError::Transport { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%endpoint, status = status.as_u16(), "upstream call rejected");
        return Err(UpstreamError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    response
        .json()
        .await
        .map_err(|source| UpstreamError::MalformedResponse { endpoint, source })
}
