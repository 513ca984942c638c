use crate::{cli::Cli, github::tag::Tag};
use anyhow::{bail, Result};
use std::env;

const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
const GITHUB_USER_VAR: &str = "GITHUB_USER";
const GITHUB_REPO_VAR: &str = "GITHUB_REPO";
const GITHUB_API_VAR: &str = "GITHUB_API";
const DEBUG_VAR: &str = "DEBUG";

const DEFAULT_API_ENDPOINT: &str = "https://api.github.com";

/// Resolved once at startup from the command line and the environment,
/// then passed by reference into every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub api_endpoint: String,
    pub recreate_draft: bool,
    pub debug: bool,
}

impl Config {
    pub fn resolve(cli: &Cli) -> Result<Config> {
        let token = match env::var(GITHUB_TOKEN_VAR) {
            Ok(token) if !token.is_empty() => token,
            _ => bail!(
                "{GITHUB_TOKEN_VAR} environment variable is not set.
Please refer to https://help.github.com/articles/creating-an-access-token-for-command-line-use/ for more help"
            ),
        };

        // GITHUB_USER/GITHUB_REPO only apply when the positional is not a
        // valid user/repo pair.
        let (owner, repo) = match parse_slug(&cli.repo) {
            Some(pair) => pair,
            None => match (env::var(GITHUB_USER_VAR), env::var(GITHUB_REPO_VAR)) {
                (Ok(owner), Ok(repo)) if !owner.is_empty() && !repo.is_empty() => (owner, repo),
                _ => bail!("Invalid format used for username and repository: {}", cli.repo),
            },
        };

        let api_endpoint =
            env::var(GITHUB_API_VAR).unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_owned());

        let debug = env::var(DEBUG_VAR)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Config {
            owner,
            repo,
            token,
            api_endpoint,
            recreate_draft: cli.recreate_draft,
            debug,
        })
    }

    pub fn repo_endpoint(&self) -> String {
        format!("{}/repos/{}/{}", self.api_endpoint, self.owner, self.repo)
    }

    pub fn releases_endpoint(&self) -> String {
        format!("{}/releases", self.repo_endpoint())
    }

    pub fn release_by_tag_endpoint(&self, tag: &Tag) -> String {
        format!("{}/releases/tags/{}", self.repo_endpoint(), tag.value())
    }

    pub fn release_endpoint(&self, id: u64) -> String {
        format!("{}/releases/{}", self.repo_endpoint(), id)
    }
}

fn parse_slug(slug: &str) -> Option<(String, String)> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Some((owner.to_owned(), repo.to_owned()))
        }
        _ => None,
    }
}
