use super::decode_response;
use super::types::TokenResponse;
use crate::error::{Endpoint, UpstreamError};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use std::fmt;

/// Short-lived access token. Lives for one rule operation and is never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    token_type: String,
    value: String,
}

impl Token {
    pub fn new(token_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            value: value.into(),
        }
    }

    /// `Authorization` header value for the rules endpoint: `"<type> <value>"`.
    pub fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Performs the client-credentials exchange against the token endpoint.
pub struct TokenProvider {
    client: Client,
    url: String,
    credential: String,
}

impl TokenProvider {
    pub fn new(client: Client, url: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            credential: credential.into(),
        }
    }

    /// One fresh exchange per call; no retry.
    pub async fn fetch_token(&self) -> Result<Token, UpstreamError> {
        let sent = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Basic {}", self.credential))
            .send()
            .await;

        let body: TokenResponse = decode_response(Endpoint::Token, sent).await?;
        tracing::debug!(token_type = %body.token_type, "retrieved upstream token");
        Ok(Token::new(body.token_type, body.access_token))
    }
}
