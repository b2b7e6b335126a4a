//! Wire shapes for the provider's token and rules endpoints.
//!
//! Response types ignore unknown fields and default missing or null
//! collections to empty, and they serialize back out without the dropped fields. The local
//! gateway returns them verbatim.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ── Token endpoint ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) token_type: String,
    pub(crate) access_token: String,
}

// ── Rules endpoint: list ─────────────────────────────────────────────────────

/// A rule already registered upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRulesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<RuleRecord>,
}

// ── Rules endpoint: add ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct AddRulesRequest {
    pub(crate) add: Vec<AddRuleValue>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddRuleValue {
    pub(crate) value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRule {
    pub value: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Per-rule problem reported by the provider inside a 2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleError {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRulesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<CreatedRule>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<RuleError>,
}

// ── Rules endpoint: delete ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct DeleteRulesRequest<'a> {
    pub(crate) delete: DeleteIds<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteIds<'a> {
    pub(crate) ids: &'a [String],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRulesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<RuleError>,
}
