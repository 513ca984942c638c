use crate::http::HttpClient;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// Result of a single asset upload. Failures land here instead of aborting
/// the publish flow, so the caller can report on them without parsing logs.
#[derive(Debug)]
pub struct UploadOutcome {
    pub path: PathBuf,
    pub result: Result<()>,
}

impl UploadOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub async fn upload_asset(http: &HttpClient, upload_url: &str, path: &Path) -> UploadOutcome {
    let result = try_upload(http, upload_url, path).await;

    if let Err(err) = &result {
        log::error!("Failed to upload {}: {err:#}", path.display());
    }

    UploadOutcome {
        path: path.to_path_buf(),
        result,
    }
}

async fn try_upload(http: &HttpClient, upload_url: &str, path: &Path) -> Result<()> {
    let file = File::open(path)
        .await
        .with_context(|| format!("Cannot open {}", path.display()))?;

    let size = file
        .metadata()
        .await
        .with_context(|| format!("Cannot stat {}", path.display()))?
        .len();

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?;

    log::info!("Uploading {name}...");

    let url = format!("{upload_url}?name={name}");
    let body = reqwest::Body::wrap_stream(ReaderStream::new(file));

    let response = http.upload(&url, body, size).await?;
    log::debug!("upload response: {response}");

    Ok(())
}
