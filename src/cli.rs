use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Github command line release tool.
///
/// Creates a release for the given tag and attaches local files to it as
/// release assets. Set the GITHUB_TOKEN environment variable with a token
/// allowed to create releases in the target repository.
#[derive(Parser, Debug)]
#[command(name = "github-release", version, after_help = ENV_HELP)]
pub struct Cli {
    /// Github user and repository, in the form user/repo
    #[arg(value_name = "USER/REPO")]
    pub repo: String,

    /// Tag used to create the release. It is also used as the release's name
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Reference from where to create the provided tag, if it does not exist
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Identify the release as a prerelease
    #[arg(long)]
    pub prerelease: bool,

    /// Save as draft, don't publish
    #[arg(long)]
    pub draft: bool,

    /// Delete previous release drafts matching the tag, if they exist
    #[arg(long)]
    pub recreate_draft: bool,

    /// Mark this release as latest
    #[arg(long, value_name = "BOOL", default_value_t = true, action = clap::ArgAction::Set)]
    pub latest: bool,

    /// Path to a file containing the release description
    #[arg(long, value_name = "FILE")]
    pub description: PathBuf,

    /// Glob patterns describing the files to attach to the release,
    /// delimited by whitespace. Enclose in quotes to avoid the shell
    /// expanding the patterns
    #[arg(long, value_name = "GLOBS")]
    pub assets: Option<String>,
}

const ENV_HELP: &str = "Environment variables:
  GITHUB_TOKEN  Must be set in order to interact with Github's API
  GITHUB_USER   Alternative way of providing the github user
  GITHUB_REPO   Alternative way of providing the github repo
  GITHUB_API    Github API endpoint. Defaults to https://api.github.com
  DEBUG         Dump requests and responses. Avoid it when uploading big files";

/// Expands whitespace-delimited glob patterns into the matching paths.
/// An invalid pattern is an error; a match that cannot be read is skipped.
pub fn expand_asset_patterns(patterns: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns.split_whitespace() {
        let entries =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(err) => log::warn!("Skipping unreadable path: {err}"),
            }
        }
    }

    Ok(paths)
}
