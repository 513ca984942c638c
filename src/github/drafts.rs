use super::{response::ReleaseResponse, tag::Tag};
use crate::{config::Config, http::HttpClient};

const PAGE_SIZE: usize = 100;

/// Deletes every draft release whose tag matches exactly, walking the list
/// endpoint one page at a time. Best-effort: every failure is logged and
/// swallowed so the publish flow keeps going.
pub async fn delete_draft_releases(http: &HttpClient, config: &Config, tag: &Tag) {
    log::info!("Deleting old draft releases, if they exist");

    let mut page = 1;
    loop {
        let url = format!(
            "{}?per_page={PAGE_SIZE}&page={page}",
            config.releases_endpoint()
        );

        let data = match http.get(&url).await {
            Ok(data) => data,
            Err(err) => {
                log::warn!("{err}");
                log::warn!("Failed to list old release drafts to delete, moving on");
                return;
            }
        };

        let releases = match serde_json::from_str::<Vec<ReleaseResponse>>(&data) {
            Ok(releases) => releases,
            Err(err) => {
                log::warn!("{err}");
                log::warn!("Failed to decode old release drafts to delete, moving on");
                return;
            }
        };

        for release in &releases {
            if release.draft && release.tag_name == tag.value() {
                log::info!(
                    "Deleting release draft with tag {} and id {}",
                    release.tag_name,
                    release.id
                );
                if let Err(err) = http.delete(&config.release_endpoint(release.id)).await {
                    log::warn!("{err}");
                    log::warn!("Failed to delete old release draft with id {}", release.id);
                }
            }
        }

        // a short page means there is nothing left to fetch
        if releases.len() < PAGE_SIZE {
            return;
        }
        page += 1;
    }
}
