mod cli;
mod coerce;
mod config;
mod error;
mod event;
mod github;
mod model;
mod output;
mod predicate;
mod sync;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::RunConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RunConfig::from_args(cli::Args::parse())?;

    if config.shadow_mode {
        info!("Running in test mode");
    } else {
        info!("Running in production mode");
        if config.event_name.as_deref() != Some("issues") {
            bail!("this tool only supports issue events");
        }
    }

    let event = event::load_event(&config.event_path)?;
    let issue = event
        .issue
        .context("no issue data found in event payload")?;
    let action = event.action.unwrap_or_default();
    info!("Processing issue event: {action}");
    info!("Issue #{}: {}", issue.number, issue.title);

    let client = github::GithubClient::new(config.token.clone());
    let synchronizer = sync::Synchronizer::new(&client, &config);
    let item_ids = synchronizer.handle_event(&action, &issue).await?;

    output::write_outputs(config.output_path.as_deref(), issue.number, &action, &item_ids)?;
    Ok(())
}
