use crate::config::Config;
use reqwest::{
    header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
    StatusCode,
};
use thiserror::Error;

const GITHUB_API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT_VALUE: &str = "github-release";

const JSON_CONTENT_TYPE: &str = "application/json";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Github returned an error:\n Code: {status}.\n Body: {body}")]
    ErrorResponse { status: StatusCode, body: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
}

/// Authenticated Github API client. Cloning shares the underlying
/// connection pool, so upload tasks can each hold a handle.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    token: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        HttpClient {
            client: reqwest::Client::new(),
            token: config.token.to_owned(),
        }
    }

    pub async fn get(&self, url: &str) -> Result<String, Error> {
        self.send(self.client.get(url)).await
    }

    pub async fn post(&self, url: &str, body: String) -> Result<String, Error> {
        log::debug!("> {body}");
        self.send(
            self.client
                .post(url)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body),
        )
        .await
    }

    pub async fn delete(&self, url: &str) -> Result<String, Error> {
        self.send(self.client.delete(url)).await
    }

    /// Uploads a streamed body. The length must be supplied by the caller,
    /// the transport cannot infer it from a stream.
    pub async fn upload(
        &self,
        url: &str,
        body: reqwest::Body,
        length: u64,
    ) -> Result<String, Error> {
        self.send(
            self.client
                .post(url)
                .header(CONTENT_TYPE, BINARY_CONTENT_TYPE)
                .header(CONTENT_LENGTH, length)
                .body(body),
        )
        .await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<String, Error> {
        let request = builder
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(GITHUB_API_VERSION_HEADER, GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .build()
            .map_err(|cause| Error::RequestError { cause })?;

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("> {} {}", request.method(), request.url());
            for (name, value) in request.headers() {
                log::debug!("> {name}: {value:?}");
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|cause| Error::RequestError { cause })?;

        response.handle().await
    }
}

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Response {
    async fn handle(self) -> Result<String, Error> {
        let status = self.status();

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("< {status}");
            for (name, value) in self.headers() {
                log::debug!("< {name}: {value:?}");
            }
        }

        let body = self
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        log::debug!("< {body}");

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(body),
            _ => Err(Error::ErrorResponse { status, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client(token: &str) -> HttpClient {
        let config = Config {
            owner: "octocat".to_owned(),
            repo: "hello-world".to_owned(),
            token: token.to_owned(),
            api_endpoint: "https://api.github.com".to_owned(),
            recreate_draft: false,
            debug: false,
        };
        HttpClient::new(&config)
    }

    #[tokio::test]
    async fn should_attach_the_default_headers() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "github-release")
            .with_body("ok")
            .create_async()
            .await;

        let response = client("test_token").get(&server.url()).await?;

        mock.assert_async().await;
        assert_eq!(response, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn should_post_a_json_body() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/releases")
            .match_header("content-type", "application/json")
            .match_body(r#"{"tag_name":"v1.0.0"}"#)
            .with_status(201)
            .with_body(r#"{"id":1}"#)
            .create_async()
            .await;

        let response = client("test_token")
            .post(
                &format!("{}/releases", server.url()),
                r#"{"tag_name":"v1.0.0"}"#.to_owned(),
            )
            .await?;

        mock.assert_async().await;
        assert_eq!(response, r#"{"id":1}"#);

        Ok(())
    }

    #[tokio::test]
    async fn should_treat_no_content_as_success() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("DELETE", "/releases/1")
            .with_status(204)
            .create_async()
            .await;

        let response = client("test_token")
            .delete(&format!("{}/releases/1", server.url()))
            .await?;

        mock.assert_async().await;
        assert_eq!(response, "");

        Ok(())
    }

    #[tokio::test]
    async fn should_report_the_status_and_body_on_failure() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let err = client("test_token").get(&server.url()).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("404"), "missing status line: {message}");
        assert!(
            message.contains(r#"{"message":"Not Found"}"#),
            "missing body: {message}"
        );
    }

    #[tokio::test]
    async fn should_stream_an_upload_body_with_explicit_length() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/assets")
            .match_query(mockito::Matcher::UrlEncoded(
                "name".into(),
                "tool.tar.gz".into(),
            ))
            .match_header("content-type", "application/octet-stream")
            .match_header("content-length", "12")
            .match_body("file content")
            .with_status(201)
            .create_async()
            .await;

        let body = reqwest::Body::from("file content");
        client("test_token")
            .upload(
                &format!("{}/assets?name=tool.tar.gz", server.url()),
                body,
                "file content".len() as u64,
            )
            .await?;

        mock.assert_async().await;

        Ok(())
    }
}
