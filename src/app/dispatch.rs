use crate::cli::{Cli, Commands, RuleCommands};
use crate::rules::{DeleteTarget, RuleService};
use crate::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Config from `--config` or the default location, with env overrides applied.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_init()?,
    };
    config.apply_env_overrides();
    Ok(config)
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    config.validate().context("invalid configuration")?;
    let config = Arc::new(config);

    match cli.command {
        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.gateway.port);
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            if port == 0 {
                info!("Starting stream rules gateway on {host} (random port)");
            } else {
                info!("Starting stream rules gateway on {host}:{port}");
            }
            crate::transport::gateway::run_gateway(&host, port, Arc::clone(&config)).await
        }

        Commands::Rules { rule_command } => {
            let service = RuleService::from_config(&config.upstream);
            run_rule_command(&service, rule_command).await
        }
    }
}

async fn run_rule_command(service: &RuleService, command: RuleCommands) -> Result<()> {
    match command {
        RuleCommands::List => print_json(&service.list().await.context("list rules")?),
        RuleCommands::Add { kind, value } => {
            let predicate = kind.with_value(value);
            info!(rule = %predicate, "adding stream rule");
            print_json(&service.add(&[predicate]).await.context("add rule")?)
        }
        RuleCommands::Delete { ids, kind, value } => {
            let targets = delete_targets(ids, kind.zip(value));
            if targets.is_empty() {
                anyhow::bail!("nothing to delete: pass --id and/or a predicate kind and value");
            }
            print_json(&service.delete(&targets).await.context("delete rules")?)
        }
    }
}

fn delete_targets(
    ids: Vec<String>,
    predicate: Option<(crate::rules::PredicateKind, String)>,
) -> Vec<DeleteTarget> {
    let mut targets: Vec<DeleteTarget> = ids.into_iter().map(|id| DeleteTarget::Id { id }).collect();
    if let Some((kind, value)) = predicate {
        targets.push(DeleteTarget::Predicate(kind.with_value(value)));
    }
    targets
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serialize rules response")?;
    println!("{rendered}");
    Ok(())
}
