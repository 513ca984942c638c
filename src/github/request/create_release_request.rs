use crate::github::release::Release;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub make_latest: String,
}

impl From<&Release> for CreateReleaseRequest {
    fn from(release: &Release) -> Self {
        CreateReleaseRequest {
            tag_name: release.tag.value().to_owned(),
            target_commitish: release.target_branch.to_owned(),
            name: release.name.to_owned(),
            body: release.body.to_owned(),
            draft: release.draft,
            prerelease: release.prerelease,
            make_latest: release.make_latest.to_owned(),
        }
    }
}
