mod cli;
mod config;
mod github;
mod http;
mod logger;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use github::release::Release;
use http::HttpClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(&cli)?;
    logger::init(config.debug)?;

    let description = tokio::fs::read_to_string(&cli.description)
        .await
        .with_context(|| {
            format!(
                "Failed to read description file '{}'",
                cli.description.display()
            )
        })?;

    let patterns = cli.assets.as_deref().unwrap_or_default();
    log::debug!("Glob patterns received: {patterns}");
    let paths = cli::expand_asset_patterns(patterns)?;
    log::debug!("Expanded glob patterns: {paths:?}");

    let release = Release::new(
        &cli.tag,
        &cli.branch,
        description,
        cli.draft,
        cli.prerelease,
        cli.latest,
    );

    let http = HttpClient::new(&config);
    let outcomes = github::publish(&http, &config, &release, &paths)
        .await
        .context("Cannot publish the release")?;

    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
    if failed > 0 {
        log::warn!("{failed} of {} assets failed to upload", outcomes.len());
    }

    log::info!("Done");

    Ok(())
}
