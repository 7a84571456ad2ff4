//! HTTP story service implementation

use crate::api::{CreateStoryResponse, StoryPayload, StoryService};
use crate::auth::AuthToken;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};
use url::Url;

/// Path of the story upload endpoint, relative to the API base URL
pub const STORIES_PATH: &str = "admin/write/stories";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Story service using reqwest
pub struct HttpStoryService {
    client: Client,
    endpoint: Url,
}

impl HttpStoryService {
    /// Create a service posting to `{base_url}/admin/write/stories`
    pub fn new(base_url: &Url) -> Result<Self> {
        let endpoint = format!("{}/{STORIES_PATH}", base_url.as_str().trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint {endpoint}: {e}")))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Full URL requests are sent to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl StoryService for HttpStoryService {
    async fn create_story(
        &self,
        payload: &StoryPayload<'_>,
        auth: Option<&AuthToken>,
    ) -> Result<CreateStoryResponse> {
        debug!(
            endpoint = %self.endpoint,
            tags = payload.tags.len(),
            has_media = payload.media.is_some(),
            "uploading story"
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .multipart(payload.to_multipart()?);

        match auth {
            Some(token) => request = request.header(AUTHORIZATION, token.bearer()),
            None => warn!("no auth token found, sending story unauthenticated"),
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "story upload rejected");
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = CreateStoryResponse::from_body(&body);
        debug!(has_story = parsed.story.is_some(), "uploaded story");
        Ok(parsed)
    }
}
