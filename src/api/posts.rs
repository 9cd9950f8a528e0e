use crate::error::FetchError;
use crate::models::Post;

/// HTTP client for the posts endpoint.
///
/// On wasm32 `reqwest` goes through the browser's fetch API, so the same
/// code serves the web and desktop builds.
#[derive(Clone, Debug)]
pub struct PostsClient {
    http: reqwest::Client,
    url: String,
}

impl PostsClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET` the endpoint and decode a JSON array of posts.
    ///
    /// Anything other than a 2xx response with a parseable body is an error.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        log::info!("Fetching posts from {}", self.url);

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        log::debug!("Posts endpoint answered with {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let posts = response.json::<Vec<Post>>().await?;
        log::debug!("Decoded {} posts", posts.len());
        Ok(posts)
    }
}
