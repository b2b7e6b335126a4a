use super::decode_response;
use super::token::Token;
use super::types::{
    AddRuleValue, AddRulesRequest, AddRulesResponse, DeleteIds, DeleteRulesRequest,
    DeleteRulesResponse, ListRulesResponse,
};
use crate::error::{Endpoint, UpstreamError};
use crate::rules::RulePredicate;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};

/// Calls against the filtered stream rules endpoint. Every call takes the token
/// obtained for the current operation.
pub struct RuleGateway {
    client: Client,
    rules_url: String,
}

impl RuleGateway {
    pub fn new(client: Client, rules_url: impl Into<String>) -> Self {
        Self {
            client,
            rules_url: rules_url.into(),
        }
    }

    pub async fn list_rules(&self, token: &Token) -> Result<ListRulesResponse, UpstreamError> {
        let sent = self
            .client
            .get(&self.rules_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, token.authorization())
            .send()
            .await;

        let listed: ListRulesResponse = decode_response(Endpoint::Rules, sent).await?;
        tracing::debug!(rules = listed.data.len(), "listed stream rules");
        Ok(listed)
    }

    /// Adds every predicate in one batched call, in input order.
    pub async fn add_rules(
        &self,
        token: &Token,
        predicates: &[RulePredicate],
    ) -> Result<AddRulesResponse, UpstreamError> {
        let body = AddRulesRequest {
            add: predicates
                .iter()
                .map(|predicate| AddRuleValue {
                    value: predicate.render(),
                })
                .collect(),
        };

        let sent = self
            .client
            .post(&self.rules_url)
            .header(AUTHORIZATION, token.authorization())
            .json(&body)
            .send()
            .await;

        let added: AddRulesResponse = decode_response(Endpoint::Rules, sent).await?;
        tracing::debug!(
            requested = predicates.len(),
            created = added.data.len(),
            errors = added.errors.len(),
            "added stream rules"
        );
        Ok(added)
    }

    /// Deletes by upstream id. An empty id list makes no call.
    pub async fn delete_rules_by_id(
        &self,
        token: &Token,
        ids: &[String],
    ) -> Result<DeleteRulesResponse, UpstreamError> {
        if ids.is_empty() {
            tracing::debug!("no matching stream rules; skipping delete call");
            return Ok(DeleteRulesResponse::default());
        }

        let body = DeleteRulesRequest {
            delete: DeleteIds { ids },
        };

        let sent = self
            .client
            .post(&self.rules_url)
            .header(AUTHORIZATION, token.authorization())
            .json(&body)
            .send()
            .await;

        let deleted: DeleteRulesResponse = decode_response(Endpoint::Rules, sent).await?;
        tracing::debug!(
            requested = ids.len(),
            errors = deleted.errors.len(),
            "deleted stream rules"
        );
        Ok(deleted)
    }

    /// Ids of listed rules whose value equals one of the rendered predicates.
    /// The provider only deletes by id, so a rule added between this listing
    /// and the delete call survives.
    pub async fn resolve_ids(
        &self,
        token: &Token,
        predicates: &[RulePredicate],
    ) -> Result<Vec<String>, UpstreamError> {
        let wanted: Vec<String> = predicates.iter().map(RulePredicate::render).collect();
        let listed = self.list_rules(token).await?;

        Ok(listed
            .data
            .into_iter()
            .filter(|record| wanted.contains(&record.value))
            .map(|record| record.id)
            .collect())
    }
}
