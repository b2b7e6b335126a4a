use super::predicate::RulePredicate;
use serde::{Deserialize, Serialize};

/// Body of `POST /rules/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRulesBody {
    pub data: Vec<RulePredicate>,
}

/// Body of `POST /rules/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRulesBody {
    pub data: Vec<DeleteTarget>,
}

/// Either an upstream id or a predicate to resolve by its rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeleteTarget {
    Id { id: String },
    Predicate(RulePredicate),
}
