//! Stories command - show the fallback cache

use crate::cli::style::Stylize;
use anstream::println;
use serde_json::Value;
use std::sync::Arc;
use storyform::cache::FallbackCache;
use storyform::config::Config;
use storyform::error::Result;
use storyform::storage::FileStore;

/// Options for the stories command
#[derive(Debug, Clone, Copy, Default)]
pub struct StoriesOptions {
    /// Show at most this many stories
    pub limit: Option<usize>,
    /// Empty the cache instead of listing it
    pub clear: bool,
}

/// Run the stories command
pub fn run_stories(config: &Config, options: StoriesOptions) -> Result<()> {
    let cache = FallbackCache::new(
        Arc::new(FileStore::new(&config.storage_path)),
        &config.stories_key,
    );

    if options.clear {
        cache.clear()?;
        println!("Cleared saved stories");
        return Ok(());
    }

    let stories = cache.load()?;
    if stories.is_empty() {
        println!("No saved stories");
        return Ok(());
    }

    let limit = options.limit.unwrap_or(usize::MAX);
    for story in stories.iter().take(limit) {
        print_story(story);
    }
    if stories.len() > limit {
        println!(
            "{}",
            format!("... {} more", stories.len() - limit).muted()
        );
    }
    Ok(())
}

fn print_story(story: &Value) {
    let id = story
        .get("_id")
        .or_else(|| story.get("id"))
        .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
        .unwrap_or_default();

    println!("{} {}", text(story, "title").emphasis(), format!("by {}", text(story, "author")).muted());
    println!("  {} {}", "id:".muted(), id.accent());
    if let Some(created) = story.get("createdAt").and_then(Value::as_str) {
        println!("  {} {created}", "created:".muted());
    }
    if let Some(tags) = story
        .get("tags")
        .and_then(Value::as_array)
        .filter(|tags| !tags.is_empty())
    {
        let tags: Vec<_> = tags.iter().filter_map(Value::as_str).collect();
        println!("  {} {}", "tags:".muted(), tags.join(", "));
    }
}

fn text<'a>(story: &'a Value, key: &str) -> &'a str {
    story.get(key).and_then(Value::as_str).unwrap_or("")
}
