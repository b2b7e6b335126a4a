//! Stream rule predicates, the local request shapes, and the operations that
//! tie the token exchange to the rules endpoint.

pub mod predicate;
pub mod request;
pub mod service;

pub use predicate::{PredicateKind, RulePredicate};
pub use request::{AddRulesBody, DeleteRulesBody, DeleteTarget};
pub use service::RuleService;
