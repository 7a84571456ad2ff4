//! Core types for story submission

use crate::error::{Error, Result};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Editable text field of a [`Draft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// Story title
    Title,
    /// Author name or alias
    Author,
    /// Story body text
    Body,
}

impl DraftField {
    /// All fields, in form order
    pub const ALL: [Self; 3] = [Self::Title, Self::Author, Self::Body];

    /// Multipart field name sent to the API
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Body => "storyBody",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for DraftField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "storyBody" | "body" => Ok(Self::Body),
            other => Err(Error::InvalidArgument(format!("unknown field: {other}"))),
        }
    }
}

/// In-progress, unsaved story content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Story title
    pub title: String,
    /// Author name or alias
    pub author: String,
    /// Story body text
    pub body: String,
}

impl Draft {
    /// Read one field
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::Body => &self.body,
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Author => &mut self.author,
            DraftField::Body => &mut self.body,
        };
        *slot = value.into();
    }

    /// First required field that is empty, if any
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

/// Broad media category, used to pick how a preview is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*`
    Image,
    /// `video/*`
    Video,
}

impl MediaKind {
    /// Classify a MIME type, `None` for anything that is not image or video
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => f.write_str("image"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// A media file selected for upload
///
/// Contents are reference counted, so clones share one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// File name sent with the multipart part
    pub name: String,
    /// MIME type
    pub mime: String,
    /// Raw file contents
    pub data: Bytes,
}

impl MediaFile {
    /// Build from in-memory bytes
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Load an image or video file from disk
    ///
    /// The MIME type is guessed from the extension; other file types are
    /// rejected.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("not a file path: {}", path.display()))
            })?
            .to_string();

        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_from_extension)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("{name} is not an image or video file"))
            })?;

        let data = tokio::fs::read(path).await?;
        Ok(Self::new(name, mime, data))
    }

    /// Media category derived from the MIME type
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime)
    }
}

fn mime_from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "ogv" => "video/ogg",
        _ => return None,
    };
    Some(mime)
}

/// Story record synthesized locally when the server does not echo one back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStory {
    /// Temporary identifier, prefixed with `tmp-`
    #[serde(rename = "_id")]
    pub id: String,
    /// Story title
    pub title: String,
    /// Author name or alias
    pub author: String,
    /// Story body text
    pub story_body: String,
    /// Tags in insertion order
    pub tags: Vec<String>,
    /// Session-local preview URI of the uploaded media
    pub media_url: Option<String>,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

impl LocalStory {
    /// Synthesize a record for `draft` submitted at `now`
    pub fn synthesize(
        draft: &Draft,
        tags: &[String],
        media_url: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("tmp-{}", now.timestamp_millis()),
            title: draft.title.clone(),
            author: draft.author.clone(),
            story_body: draft.body.clone(),
            tags: tags.to_vec(),
            media_url,
            created_at: now,
        }
    }
}

/// Canonical record of a completed submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// `story` object returned by the server, kept verbatim
    Server(serde_json::Value),
    /// Locally synthesized record
    Local(LocalStory),
}

impl SubmissionResult {
    /// Identifier of the story, if one is known
    pub fn id(&self) -> Option<String> {
        match self {
            Self::Server(value) => value
                .get("_id")
                .or_else(|| value.get("id"))
                .map(|id| match id {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            Self::Local(story) => Some(story.id.clone()),
        }
    }

    /// True when the record was synthesized locally
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// JSON form stored in the fallback cache
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Self::Server(value) => Ok(value.clone()),
            Self::Local(story) => Ok(serde_json::to_value(story)?),
        }
    }
}

/// Observable state of the submit operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No submission attempted since the last reset
    #[default]
    Idle,
    /// Request in flight
    Pending,
    /// Last submission succeeded
    Succeeded,
    /// Last submission failed with this message
    Failed(String),
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}
