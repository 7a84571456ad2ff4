//! Submission controller tests against an in-memory service

mod common;

use chrono::DateTime;
use common::{MockResponse, MockStoryService, ReadOnlyStore, RecordingToasts};
use serde_json::json;
use std::sync::{Arc, Mutex};
use storyform::cache::FallbackCache;
use storyform::error::Error;
use storyform::form::{ERROR_MESSAGE, FormContext, ObjectUrlRegistry, SUCCESS_MESSAGE, StoryForm};
use storyform::notify::{Notifier, Severity};
use storyform::storage::{KeyValueStore, MemoryStore};
use storyform::types::{Draft, DraftField, MediaFile, SubmissionResult, SubmitStatus};

struct Harness {
    form: StoryForm,
    service: Arc<MockStoryService>,
    store: Arc<MemoryStore>,
    toasts: Arc<RecordingToasts>,
    previews: Arc<ObjectUrlRegistry>,
}

fn harness_with(service: MockStoryService) -> Harness {
    let service = Arc::new(service);
    let store = Arc::new(MemoryStore::new());
    let toasts = Arc::new(RecordingToasts::default());
    let previews = Arc::new(ObjectUrlRegistry::new());

    let ctx = FormContext::new(service.clone(), store.clone())
        .with_notifier(Notifier::new(toasts.clone()))
        .with_previews(previews.clone());

    Harness {
        form: StoryForm::new(ctx),
        service,
        store,
        toasts,
        previews,
    }
}

fn harness(response: MockResponse) -> Harness {
    harness_with(MockStoryService::new(response))
}

fn fill(form: &mut StoryForm) {
    form.update_field(DraftField::Title, "A");
    form.update_field(DraftField::Author, "B");
    form.update_field(DraftField::Body, "C");
    form.add_tag("x");
    form.add_tag("y");
}

fn video() -> MediaFile {
    MediaFile::new("clip.mp4", "video/mp4", vec![0u8, 0, 0, 0x18])
}

#[test]
fn test_duplicate_blank_and_out_of_range_tags_are_noops() {
    let mut h = harness(MockResponse::NoStory);
    h.form.add_tag("x");
    let before = h.form.tags().clone();

    assert!(!h.form.add_tag("x"));
    assert!(!h.form.add_tag("   "));
    assert_eq!(h.form.remove_tag(5), None);
    assert_eq!(h.form.tags(), &before);
}

#[test]
fn test_selecting_media_revokes_previous_preview() {
    let mut h = harness(MockResponse::NoStory);

    h.form.select_media(Some(video()));
    let first = h.form.media().preview().cloned().unwrap();
    h.form
        .select_media(Some(MediaFile::new("cover.png", "image/png", vec![1u8])));
    let second = h.form.media().preview().cloned().unwrap();

    assert_ne!(first, second);
    assert!(h.previews.resolve(&first).is_none());
    assert_eq!(h.previews.live_count(), 1);

    h.form.select_media(None);
    assert!(h.form.media().preview().is_none());
    assert_eq!(h.previews.live_count(), 0);
}

#[tokio::test]
async fn test_payload_has_json_tags_and_no_media() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);

    h.form.submit().await.unwrap();

    let calls = h.service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].fields,
        vec![
            ("title", "A".to_string()),
            ("author", "B".to_string()),
            ("storyBody", "C".to_string()),
            ("tags", r#"["x","y"]"#.to_string()),
        ]
    );
    assert!(!calls[0].part_names.contains(&"media"));
    assert_eq!(calls[0].media_name, None);
}

#[tokio::test]
async fn test_media_is_sent_when_selected() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);
    h.form.select_media(Some(video()));

    h.form.submit().await.unwrap();

    let calls = h.service.calls();
    assert!(calls[0].part_names.contains(&"media"));
    assert_eq!(calls[0].media_name.as_deref(), Some("clip.mp4"));
}

#[tokio::test]
async fn test_success_resets_form_and_releases_preview() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);
    h.form.select_media(Some(video()));

    h.form.submit().await.unwrap();

    assert_eq!(h.form.draft(), &Draft::default());
    assert!(h.form.tags().is_empty());
    assert!(h.form.media().is_empty());
    assert!(h.form.media().preview().is_none());
    assert_eq!(h.previews.live_count(), 0);
    assert_eq!(h.form.status(), SubmitStatus::Succeeded);
    assert_eq!(h.toasts.severities(), vec![Severity::Success]);
    assert_eq!(h.toasts.last().unwrap().message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_failure_leaves_form_unchanged() {
    let h = harness(MockResponse::Fail(500));
    let calls = Arc::new(Mutex::new(0));
    let counter = calls.clone();
    let mut h = Harness {
        form: h.form.on_success(move |_| *counter.lock().unwrap() += 1),
        ..h
    };
    fill(&mut h.form);
    h.form.select_media(Some(video()));
    let draft = h.form.draft().clone();
    let tags = h.form.tags().clone();
    let preview = h.form.media().preview().cloned();

    let err = h.form.submit().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert_eq!(h.form.draft(), &draft);
    assert_eq!(h.form.tags(), &tags);
    assert_eq!(h.form.media().preview().cloned(), preview);
    assert_eq!(h.previews.live_count(), 1);
    assert!(matches!(h.form.status(), SubmitStatus::Failed(_)));
    assert_eq!(*calls.lock().unwrap(), 0);

    let toasts = h.toasts.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity, Severity::Error);
    assert_eq!(toasts[0].message, ERROR_MESSAGE);
    assert!(FallbackCache::new(h.store.clone(), "createdStories")
        .load()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_missing_field_fails_before_any_request() {
    let mut h = harness(MockResponse::NoStory);
    h.form.update_field(DraftField::Title, "A");
    h.form.update_field(DraftField::Body, "C");

    let err = h.form.submit().await.unwrap_err();

    assert!(matches!(err, Error::MissingField("author")));
    assert!(h.service.calls().is_empty());
    assert!(h.toasts.toasts().is_empty());
    assert_eq!(h.form.status(), SubmitStatus::Idle);
    assert_eq!(h.form.draft().title, "A");
}

#[tokio::test]
async fn test_missing_story_synthesizes_local_record() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);

    let result = h.form.submit().await.unwrap();

    let SubmissionResult::Local(story) = result else {
        panic!("expected a locally synthesized record");
    };
    assert!(story.id.starts_with("tmp-"));
    assert!(story.id.len() > "tmp-".len());
    assert_eq!(story.title, "A");
    assert_eq!(story.story_body, "C");
    assert_eq!(story.tags, vec!["x", "y"]);

    let cached = FallbackCache::new(h.store.clone(), "createdStories")
        .load()
        .unwrap();
    let created_at = cached[0]["createdAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_server_story_is_used_verbatim() {
    let story = json!({ "_id": "665f", "title": "A", "extra": { "views": 0 } });
    let mut h = harness(MockResponse::Story(story.clone()));
    fill(&mut h.form);

    let result = h.form.submit().await.unwrap();

    assert_eq!(result, SubmissionResult::Server(story.clone()));
    let cached = FallbackCache::new(h.store.clone(), "createdStories")
        .load()
        .unwrap();
    assert_eq!(cached, vec![story]);
}

#[tokio::test]
async fn test_cache_with_one_entry_gets_newest_first() {
    let mut h = harness(MockResponse::Story(json!({ "_id": "new" })));
    h.store
        .set("createdStories", r#"[{"_id":"old"}]"#)
        .unwrap();
    fill(&mut h.form);

    h.form.submit().await.unwrap();

    let cached = FallbackCache::new(h.store.clone(), "createdStories")
        .load()
        .unwrap();
    assert_eq!(cached, vec![json!({ "_id": "new" }), json!({ "_id": "old" })]);
}

#[tokio::test]
async fn test_success_callback_runs_once() {
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let sink = seen.clone();

    let h = harness(MockResponse::Story(json!({ "_id": "s1" })));
    let mut form = h.form.on_success(move |result| sink.lock().unwrap().push(result.id()));
    fill(&mut form);

    form.submit().await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Some("s1".to_string())]);
}

#[tokio::test]
async fn test_token_read_from_store_at_submit_time() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);
    h.store.set("authToken", "secret").unwrap();

    h.form.submit().await.unwrap();

    assert_eq!(h.service.calls()[0].bearer.as_deref(), Some("Bearer secret"));
}

#[tokio::test]
async fn test_missing_token_still_sends_request() {
    let mut h = harness(MockResponse::NoStory);
    fill(&mut h.form);

    h.form.submit().await.unwrap();

    assert_eq!(h.service.calls()[0].bearer, None);
}

#[tokio::test]
async fn test_cache_write_failure_does_not_fail_submit() {
    let service = Arc::new(MockStoryService::new(MockResponse::NoStory));
    let store = Arc::new(ReadOnlyStore::default());
    let called = Arc::new(Mutex::new(false));
    let flag = called.clone();

    let mut form = StoryForm::new(FormContext::new(service.clone(), store))
        .on_success(move |_| *flag.lock().unwrap() = true);
    fill(&mut form);

    let result = form.submit().await;

    assert!(result.is_ok());
    assert!(*called.lock().unwrap());
    assert_eq!(form.draft(), &Draft::default());
    assert_eq!(form.status(), SubmitStatus::Succeeded);
}

#[tokio::test]
async fn test_status_is_pending_while_request_in_flight() {
    let (service, gate) = MockStoryService::gated(MockResponse::NoStory);
    let mut h = harness_with(service);
    fill(&mut h.form);
    let mut status = h.form.subscribe();
    assert_eq!(*status.borrow(), SubmitStatus::Idle);

    let toasts = h.toasts.clone();
    let observer = async move {
        status
            .wait_for(|s| *s == SubmitStatus::Pending)
            .await
            .unwrap();
        // loading toast is up while the request is held
        assert_eq!(toasts.severities(), vec![Severity::Loading]);
        gate.notify_one();
        status
            .wait_for(|s| *s == SubmitStatus::Succeeded)
            .await
            .map(|s| s.clone())
            .unwrap()
    };

    let (result, final_status) = tokio::join!(h.form.submit(), observer);

    assert!(result.is_ok());
    assert_eq!(final_status, SubmitStatus::Succeeded);
    assert_eq!(h.toasts.severities(), vec![Severity::Success]);
}

#[tokio::test]
async fn test_resubmit_after_failure_sends_same_draft() {
    let mut h = harness(MockResponse::Fail(503));
    fill(&mut h.form);

    assert!(h.form.submit().await.is_err());
    assert!(h.form.submit().await.is_err());

    let calls = h.service.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].fields, calls[1].fields);
}
