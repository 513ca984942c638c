use super::tag::Tag;

/// A tagged publication point in a repository, as constructed from the
/// command line. The server-assigned id and upload endpoint never live
/// here, they arrive on the create/fetch response.
#[derive(Debug, Clone)]
pub struct Release {
    pub tag: Tag,
    pub target_branch: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
    pub make_latest: String,
}

impl Release {
    pub fn new(
        tag: impl Into<String>,
        target_branch: impl Into<String>,
        body: impl Into<String>,
        draft: bool,
        prerelease: bool,
        latest: bool,
    ) -> Self {
        let tag = Tag::new(tag);

        Release {
            // the release is always named after its tag
            name: tag.value().to_owned(),
            tag,
            target_branch: target_branch.into(),
            body: body.into(),
            draft,
            prerelease,
            make_latest: latest.to_string(),
        }
    }
}
