//! Admin API client
//!
//! [`StoryService`] abstracts the story upload endpoint so the form
//! controller can run against the real HTTP service or a test double.

mod http;
mod payload;

pub use http::{HttpStoryService, STORIES_PATH};
pub use payload::StoryPayload;

use crate::auth::AuthToken;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Successful response of the story upload endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStoryResponse {
    /// Story record echoed by the server, when it sends one
    pub story: Option<Value>,
}

impl CreateStoryResponse {
    /// Parse a success body
    ///
    /// Only a JSON object under a top-level `story` key counts as a story.
    /// Anything else (non-JSON text, arrays, `null`, scalars) yields no story.
    pub fn from_body(body: &str) -> Self {
        let story = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(mut fields)) => fields.remove("story").filter(Value::is_object),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "response body is not JSON");
                None
            }
        };
        Self { story }
    }
}

/// Story upload service
#[async_trait]
pub trait StoryService: Send + Sync {
    /// Upload one story
    ///
    /// `auth` is sent as a bearer token when present.
    async fn create_story(
        &self,
        payload: &StoryPayload<'_>,
        auth: Option<&AuthToken>,
    ) -> Result<CreateStoryResponse>;
}
