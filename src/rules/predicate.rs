//! Filter predicates and their rendering into the provider's rule query language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single filter condition, tagged on the wire by `"@type"`.
///
/// Rendering never escapes embedded double quotes; a user id containing `"`
/// produces malformed query text upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum RulePredicate {
    #[serde(rename = "mention")]
    Mention {
        #[serde(rename = "userId")]
        user_id: String,
    },
    #[serde(rename = "hashtag")]
    Hashtag { hashtag: String },
    #[serde(rename = "exact-match")]
    ExactMatch { value: String },
    #[serde(rename = "from")]
    From {
        #[serde(rename = "userId")]
        user_id: String,
    },
    #[serde(rename = "to")]
    To {
        #[serde(rename = "userId")]
        user_id: String,
    },
    #[serde(rename = "entity")]
    Entity { entity: String },
    #[serde(rename = "retweets-of")]
    RetweetsOf {
        #[serde(rename = "userId")]
        user_id: String,
    },
}

impl RulePredicate {
    /// Canonical upstream rule text.
    pub fn render(&self) -> String {
        match self {
            Self::Mention { user_id } => format!("@{user_id}"),
            Self::Hashtag { hashtag } => format!("#{hashtag}"),
            Self::ExactMatch { value } => value.clone(),
            Self::From { user_id } => format!("from: \"{user_id}\""),
            Self::To { user_id } => format!("to: \"{user_id}\""),
            Self::Entity { entity } => format!("entity: \"{entity}\""),
            Self::RetweetsOf { user_id } => format!("retweets_of: \"{user_id}\""),
        }
    }
}

impl fmt::Display for RulePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Payload-free discriminator, spelled the same as the `"@type"` tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PredicateKind {
    Mention,
    Hashtag,
    ExactMatch,
    From,
    To,
    Entity,
    RetweetsOf,
}

impl PredicateKind {
    pub fn with_value(self, value: impl Into<String>) -> RulePredicate {
        let value = value.into();
        match self {
            Self::Mention => RulePredicate::Mention { user_id: value },
            Self::Hashtag => RulePredicate::Hashtag { hashtag: value },
            Self::ExactMatch => RulePredicate::ExactMatch { value },
            Self::From => RulePredicate::From { user_id: value },
            Self::To => RulePredicate::To { user_id: value },
            Self::Entity => RulePredicate::Entity { entity: value },
            Self::RetweetsOf => RulePredicate::RetweetsOf { user_id: value },
        }
    }
}
