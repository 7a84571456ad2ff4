//! Story submission controller

use crate::api::{CreateStoryResponse, StoryPayload, StoryService};
use crate::auth::get_auth_token;
use crate::cache::FallbackCache;
use crate::config::{DEFAULT_STORIES_KEY, DEFAULT_TOKEN_KEY};
use crate::error::{Error, Result};
use crate::form::{MediaAttachment, ObjectUrlRegistry, PreviewProvider, TagSet};
use crate::notify::{Notifier, PromiseMessages};
use crate::storage::KeyValueStore;
use crate::types::{Draft, DraftField, LocalStory, MediaFile, SubmissionResult, SubmitStatus};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Toast shown while the upload is in flight
pub const PENDING_MESSAGE: &str = "Uploading story...";
/// Toast shown after a successful upload
pub const SUCCESS_MESSAGE: &str = "Story posted successfully!";
/// Toast shown after any failed upload
pub const ERROR_MESSAGE: &str = "Something went wrong!";

type SuccessCallback = Box<dyn FnMut(&SubmissionResult) + Send + Sync>;

/// Collaborators injected into a [`StoryForm`]
#[derive(Clone)]
pub struct FormContext {
    /// Upload endpoint
    pub service: Arc<dyn StoryService>,
    /// Client-side store holding the token and fallback cache
    pub store: Arc<dyn KeyValueStore>,
    /// Toast facade
    pub notifier: Notifier,
    /// Preview URI provider
    pub previews: Arc<dyn PreviewProvider>,
    /// Store key of the bearer token
    pub token_key: String,
    /// Store key of the fallback cache
    pub stories_key: String,
}

impl FormContext {
    /// Context with silent notifications, in-process previews and default keys
    pub fn new(service: Arc<dyn StoryService>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            service,
            store,
            notifier: Notifier::noop(),
            previews: Arc::new(ObjectUrlRegistry::new()),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            stories_key: DEFAULT_STORIES_KEY.to_string(),
        }
    }

    /// Use `notifier` for toasts
    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Use `previews` to mint preview URIs
    #[must_use]
    pub fn with_previews(mut self, previews: Arc<dyn PreviewProvider>) -> Self {
        self.previews = previews;
        self
    }

    /// Override the store keys
    #[must_use]
    pub fn with_keys(mut self, token_key: impl Into<String>, stories_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self.stories_key = stories_key.into();
        self
    }
}

/// Story draft plus the workflow that submits it
///
/// Field edits are synchronous. [`submit`](Self::submit) validates, uploads,
/// records the result in the fallback cache and resets the form. Progress is
/// published on a watch channel, see [`subscribe`](Self::subscribe).
pub struct StoryForm {
    draft: Draft,
    tags: TagSet,
    media: MediaAttachment,
    service: Arc<dyn StoryService>,
    store: Arc<dyn KeyValueStore>,
    token_key: String,
    cache: FallbackCache,
    notifier: Notifier,
    status: watch::Sender<SubmitStatus>,
    on_success: Option<SuccessCallback>,
}

impl StoryForm {
    /// Empty form wired to `ctx`
    pub fn new(ctx: FormContext) -> Self {
        let (status, _) = watch::channel(SubmitStatus::Idle);
        Self {
            draft: Draft::default(),
            tags: TagSet::new(),
            media: MediaAttachment::new(ctx.previews),
            cache: FallbackCache::new(ctx.store.clone(), ctx.stories_key),
            service: ctx.service,
            store: ctx.store,
            token_key: ctx.token_key,
            notifier: ctx.notifier,
            status,
            on_success: None,
        }
    }

    /// Call `callback` with every successful result
    #[must_use]
    pub fn on_success(mut self, callback: impl FnMut(&SubmissionResult) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Set one draft field
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Add a tag; see [`TagSet::add`]
    pub fn add_tag(&mut self, text: &str) -> bool {
        self.tags.add(text)
    }

    /// Remove the tag at `index`; out-of-range is a no-op
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        self.tags.remove(index)
    }

    /// Replace the media attachment, `None` clears it
    pub fn select_media(&mut self, file: Option<MediaFile>) {
        self.media.select(file);
    }

    /// Current draft
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current tags
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Current media attachment
    pub const fn media(&self) -> &MediaAttachment {
        &self.media
    }

    /// Latest submit status
    pub fn status(&self) -> SubmitStatus {
        self.status.borrow().clone()
    }

    /// Watch submit status transitions
    pub fn subscribe(&self) -> watch::Receiver<SubmitStatus> {
        self.status.subscribe()
    }

    /// Clear draft, tags and media
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.tags.clear();
        self.media.clear();
    }

    /// Submit the draft
    ///
    /// Fails with [`Error::MissingField`] before any I/O when title, author
    /// or body is empty. On upload failure a generic error toast is shown,
    /// the form is left untouched and the error is returned.
    pub async fn submit(&mut self) -> Result<SubmissionResult> {
        if let Some(field) = self.draft.first_missing() {
            return Err(Error::MissingField(field.wire_name()));
        }

        self.status.send_replace(SubmitStatus::Pending);

        match self.upload().await {
            Ok(response) => {
                let result = self.complete(response);
                self.status.send_replace(SubmitStatus::Succeeded);
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "story submission failed");
                self.status.send_replace(SubmitStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    async fn upload(&self) -> Result<CreateStoryResponse> {
        let payload = StoryPayload::new(&self.draft, self.tags.as_slice(), self.media.file());
        let request = async {
            let token = get_auth_token(self.store.as_ref(), &self.token_key)?;
            self.service.create_story(&payload, token.as_ref()).await
        };

        self.notifier
            .for_future(
                request,
                PromiseMessages::new(PENDING_MESSAGE, SUCCESS_MESSAGE, ERROR_MESSAGE),
                None,
            )
            .await
    }

    fn complete(&mut self, response: CreateStoryResponse) -> SubmissionResult {
        let result = match response.story {
            Some(story) => SubmissionResult::Server(story),
            None => {
                debug!("server returned no story, synthesizing local record");
                SubmissionResult::Local(LocalStory::synthesize(
                    &self.draft,
                    self.tags.as_slice(),
                    self.media.preview().map(ToString::to_string),
                    Utc::now(),
                ))
            }
        };

        if let Err(e) = self.cache.prepend(&result) {
            warn!(error = %e, "could not save story to fallback cache");
        }

        if let Some(callback) = self.on_success.as_mut() {
            callback(&result);
        }

        self.reset();
        result
    }
}

impl fmt::Debug for StoryForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoryForm")
            .field("draft", &self.draft)
            .field("tags", &self.tags)
            .field("media", &self.media)
            .field("status", &*self.status.borrow())
            .finish_non_exhaustive()
    }
}
