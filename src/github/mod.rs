pub mod drafts;
pub mod release;
pub mod request;
pub mod response;
pub mod tag;
pub mod upload;

use self::{
    release::Release, request::CreateReleaseRequest, response::ReleaseResponse,
    upload::UploadOutcome,
};
use crate::{config::Config, http::HttpClient};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::task::JoinSet;

/// Creates the release, or falls back to the one already existing for the
/// tag, then attaches every file to it with one concurrent upload per file.
/// Individual upload failures are collected, not propagated.
pub async fn publish(
    http: &HttpClient,
    config: &Config,
    release: &Release,
    paths: &[PathBuf],
) -> Result<Vec<UploadOutcome>> {
    let body = serde_json::to_string(&CreateReleaseRequest::from(release))
        .context("Cannot serialize the release")?;

    if config.recreate_draft {
        drafts::delete_draft_releases(http, config, &release.tag).await;
    }

    let data = match http.post(&config.releases_endpoint(), body).await {
        Ok(data) => data,
        Err(err) => {
            log::warn!("{err}");
            log::warn!("Trying again assuming the release already exists");
            http.get(&config.release_by_tag_endpoint(&release.tag))
                .await
                .context("Cannot create the release nor fetch it by tag")?
        }
    };

    let response = serde_json::from_str::<ReleaseResponse>(&data)
        .context("Cannot decode the release response")?;
    let upload_url = response.upload_endpoint().to_owned();

    let mut tasks = JoinSet::new();
    for path in paths {
        let http = http.clone();
        let upload_url = upload_url.to_owned();
        let path = path.to_owned();
        tasks.spawn(async move { upload::upload_asset(&http, &upload_url, &path).await });
    }

    let mut outcomes = Vec::with_capacity(paths.len());
    while let Some(outcome) = tasks.join_next().await {
        outcomes.push(outcome.context("Upload task failed to run")?);
    }

    Ok(outcomes)
}
