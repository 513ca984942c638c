use serde::Deserialize;

/// Server representation of a release. Deserializes both the create/fetch
/// response and the items of the paginated list endpoint, so everything
/// beyond the assigned id and upload endpoint is tolerated with defaults.
#[derive(Debug, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub upload_url: String,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub target_commitish: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}

impl ReleaseResponse {
    /// The upload_url field is a URI template ending in a `{?name}`
    /// placeholder. Everything from the first `{` must go before the URL
    /// can be used.
    pub fn upload_endpoint(&self) -> &str {
        self.upload_url
            .split('{')
            .next()
            .unwrap_or(&self.upload_url)
    }
}
