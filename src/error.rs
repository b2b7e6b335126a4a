use std::fmt;

use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `streamrules`.
///
/// Library callers can match on these to tell configuration problems apart from
/// upstream failures; internal plumbing keeps using `anyhow::Result` for
/// ad-hoc context chains.
#[derive(Debug, Error)]
pub enum StreamRulesError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Upstream provider ────────────────────────────────────────────────
    #[error("upstream: {0}")]
    Upstream(#[from] UpstreamError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Upstream errors ─────────────────────────────────────────────────────────

/// Which upstream endpoint a call was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Token,
    Rules,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token => f.write_str("oauth token endpoint"),
            Self::Rules => f.write_str("rules endpoint"),
        }
    }
}

/// Failure of a single upstream call.
///
/// None of these are retried, and the gateway collapses all of them into one
/// empty-bodied failure response.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No response was received.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The body did not decode into the expected shape.
    #[error("{endpoint} response could not be decoded: {source}")]
    MalformedResponse {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::MalformedResponse { endpoint, .. } => *endpoint,
        }
    }

    /// Upstream HTTP status, or `None` when no response was received or the
    /// failure happened while decoding.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::MalformedResponse { .. } => None,
        }
    }
}
