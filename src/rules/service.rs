use super::predicate::RulePredicate;
use super::request::DeleteTarget;
use crate::config::UpstreamConfig;
use crate::error::UpstreamError;
use crate::upstream::{
    AddRulesResponse, DeleteRulesResponse, ListRulesResponse, RuleGateway, TokenProvider,
    build_upstream_client,
};

/// Token fetch followed by the rules call, for each local operation.
///
/// Every operation fetches its own token. Nothing is cached between calls and
/// nothing is retried.
pub struct RuleService {
    tokens: TokenProvider,
    gateway: RuleGateway,
}

impl RuleService {
    pub fn new(tokens: TokenProvider, gateway: RuleGateway) -> Self {
        Self { tokens, gateway }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        let client = build_upstream_client(config);
        Self::new(
            TokenProvider::new(
                client.clone(),
                config.oauth_url(),
                config.bearer_credential.clone(),
            ),
            RuleGateway::new(client, config.rules_url()),
        )
    }

    pub async fn list(&self) -> Result<ListRulesResponse, UpstreamError> {
        let token = self.tokens.fetch_token().await?;
        self.gateway.list_rules(&token).await
    }

    pub async fn add(&self, predicates: &[RulePredicate]) -> Result<AddRulesResponse, UpstreamError> {
        let token = self.tokens.fetch_token().await?;
        self.gateway.add_rules(&token, predicates).await
    }

    /// Ids pass through as given. Predicates are resolved with one listing
    /// call, and only when at least one is present.
    pub async fn delete(
        &self,
        targets: &[DeleteTarget],
    ) -> Result<DeleteRulesResponse, UpstreamError> {
        let token = self.tokens.fetch_token().await?;

        let mut ids: Vec<String> = Vec::with_capacity(targets.len());
        let mut predicates: Vec<RulePredicate> = Vec::new();
        for target in targets {
            match target {
                DeleteTarget::Id { id } => push_unique(&mut ids, id.clone()),
                DeleteTarget::Predicate(predicate) => predicates.push(predicate.clone()),
            }
        }

        if !predicates.is_empty() {
            for id in self.gateway.resolve_ids(&token, &predicates).await? {
                push_unique(&mut ids, id);
            }
        }

        self.gateway.delete_rules_by_id(&token, &ids).await
    }
}

fn push_unique(ids: &mut Vec<String>, id: String) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}
