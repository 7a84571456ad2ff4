//! Submit command - upload a story

use crate::cli::TerminalToasts;
use crate::cli::style::{Stylize, check};
use anstream::println;
use dialoguer::{Editor, Input};
use std::path::PathBuf;
use std::sync::Arc;
use storyform::api::HttpStoryService;
use storyform::auth::get_auth_token;
use storyform::config::Config;
use storyform::error::{Error, Result};
use storyform::form::{FormContext, StoryForm};
use storyform::notify::Notifier;
use storyform::storage::FileStore;
use storyform::types::{DraftField, MediaFile, SubmissionResult};

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Story title
    pub title: Option<String>,
    /// Author name or alias
    pub author: Option<String>,
    /// Story body text
    pub body: Option<String>,
    /// Read the body from this file
    pub body_file: Option<PathBuf>,
    /// Tags, in order
    pub tags: Vec<String>,
    /// Image or video to attach
    pub media: Option<PathBuf>,
    /// Never prompt for missing fields
    pub no_input: bool,
}

/// Run the submit command
pub async fn run_submit(config: &Config, options: SubmitOptions) -> Result<()> {
    let api_url = config.require_api_url()?;

    let body = match (options.body, &options.body_file) {
        (Some(_), Some(_)) => {
            return Err(Error::InvalidArgument(
                "Cannot use --body and --body-file together".to_string(),
            ));
        }
        (None, Some(path)) => Some(tokio::fs::read_to_string(path).await?),
        (body, None) => body,
    };

    let media = match &options.media {
        Some(path) => Some(MediaFile::from_path(path).await?),
        None => None,
    };

    let store = Arc::new(FileStore::new(&config.storage_path));
    let notifier = Notifier::new(Arc::new(TerminalToasts::new()));

    if get_auth_token(&*store, &config.token_key)?.is_none() {
        notifier.warning(
            "No API token found; run `storyform auth login` if the server rejects this story",
            None,
        );
    }

    let ctx = FormContext::new(Arc::new(HttpStoryService::new(api_url)?), store)
        .with_notifier(notifier)
        .with_keys(&config.token_key, &config.stories_key);

    let mut form = StoryForm::new(ctx);

    for (field, value) in [
        (DraftField::Title, options.title),
        (DraftField::Author, options.author),
        (DraftField::Body, body),
    ] {
        let value = match value {
            Some(v) => v,
            None if options.no_input => continue,
            None => prompt_field(field)?,
        };
        form.update_field(field, value);
    }

    for tag in &options.tags {
        form.add_tag(tag);
    }
    let attached = media
        .as_ref()
        .and_then(|m| m.kind().map(|kind| format!("{kind} {}", m.name)));
    form.select_media(media);

    let result = form.submit().await?;
    print_result(&result, attached.as_deref());
    Ok(())
}

fn prompt_field(field: DraftField) -> Result<String> {
    let prompt_err = |e: dialoguer::Error| Error::Internal(format!("Failed to read {field}: {e}"));

    match field {
        DraftField::Title => Input::new()
            .with_prompt("Story title")
            .interact_text()
            .map_err(prompt_err),
        DraftField::Author => Input::new()
            .with_prompt("Author (your name or alias)")
            .interact_text()
            .map_err(prompt_err),
        DraftField::Body => Ok(Editor::new()
            .edit("")
            .map_err(|e| Error::Internal(format!("Failed to read {field}: {e}")))?
            .unwrap_or_default()),
    }
}

fn print_result(result: &SubmissionResult, attached: Option<&str>) {
    let id = result.id().unwrap_or_else(|| "(no id)".to_string());
    println!("{} Story {}", check(), id.accent());
    if let Some(attached) = attached {
        println!("  {} {attached}", "with".muted());
    }
    if result.is_local() {
        println!(
            "  {}",
            "Server did not return the story; recorded locally.".muted()
        );
    }
}
