use crate::rules::PredicateKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `streamrules` - proxy for a provider's filtered stream rules API.
#[derive(Parser, Debug)]
#[command(name = "streamrules")]
#[command(version)]
#[command(about = "Manage filtered stream rules through a local proxy.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.streamrules/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Call the rules endpoint directly and print the result
    Rules {
        #[command(subcommand)]
        rule_command: RuleCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RuleCommands {
    /// List registered rules
    List,

    /// Add one rule
    Add {
        /// mention, hashtag, exact-match, from, to, entity, retweets-of
        kind: PredicateKind,

        /// User id, hashtag, entity name, or exact text
        value: String,
    },

    /// Delete rules by upstream id and/or by predicate
    Delete {
        /// Upstream rule id (repeatable)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Predicate kind to resolve against the current listing
        #[arg(requires = "value")]
        kind: Option<PredicateKind>,

        /// Predicate value
        value: Option<String>,
    },
}
