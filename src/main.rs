//! Wikiator - publish tagged source comments to a documentation wiki.

mod cli;
mod config;
mod deploy;
mod hook;
mod logger;
mod publish;
mod sources;
mod utils;
mod wiki;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::WikiatorConfig;
use deploy::WikiCheckout;
use hook::install_hook;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Setup { .. } => install_hook(&config).map(|_| ()),
        Commands::Staged { .. } | Commands::Scan { .. } => publish_project(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<WikiatorConfig> {
    let config_path = cli.project().join(&cli.config);

    let mut config = if config_path.exists() {
        WikiatorConfig::from_path(&config_path)?
    } else {
        WikiatorConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Publish the project's tagged blocks, then commit and push the new pages
fn publish_project(config: &WikiatorConfig) -> Result<()> {
    let checkout = WikiCheckout::prepare(config)?;

    // A checkout inside the project must not be scanned as source.
    let skip = checkout
        .root()
        .starts_with(&config.project)
        .then(|| checkout.root());
    let files = sources::collect(config, skip)?;

    let report = publish::publish_files(&checkout.wiki(config), &files)?;
    checkout.deploy(config, &report)
}
