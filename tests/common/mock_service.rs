//! In-memory story service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyform::api::{CreateStoryResponse, StoryPayload, StoryService};
use storyform::auth::AuthToken;
use storyform::error::{Error, Result};
use tokio::sync::Notify;

/// What the mock answers with
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Success echoing this story object
    Story(serde_json::Value),
    /// Success without a story
    NoStory,
    /// API error with this status
    Fail(u16),
}

/// One recorded upload
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedCall {
    pub fields: Vec<(&'static str, String)>,
    pub part_names: Vec<&'static str>,
    pub media_name: Option<String>,
    pub bearer: Option<String>,
}

/// Story service double that records every call
pub struct MockStoryService {
    response: MockResponse,
    calls: Mutex<Vec<RecordedCall>>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl MockStoryService {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Service that blocks each call until the returned gate is notified
    pub fn gated(response: MockResponse) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let service = Self {
            gate: Some(gate.clone()),
            ..Self::new(response)
        };
        (service, gate)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryService for MockStoryService {
    async fn create_story(
        &self,
        payload: &StoryPayload<'_>,
        auth: Option<&AuthToken>,
    ) -> Result<CreateStoryResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            fields: payload.text_fields()?,
            part_names: payload.part_names(),
            media_name: payload.media.map(|m| m.name.clone()),
            bearer: auth.map(AuthToken::bearer),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.response {
            MockResponse::Story(story) => Ok(CreateStoryResponse {
                story: Some(story.clone()),
            }),
            MockResponse::NoStory => Ok(CreateStoryResponse::default()),
            MockResponse::Fail(status) => Err(Error::Api {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }
}
