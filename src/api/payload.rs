//! Multipart payload for story uploads

use crate::error::Result;
use crate::types::{Draft, DraftField, MediaFile};
use reqwest::multipart::{Form, Part};

/// Multipart field carrying the tag list as JSON text
pub const TAGS_FIELD: &str = "tags";
/// Multipart field carrying the media file
pub const MEDIA_FIELD: &str = "media";

/// Borrowed view of everything sent in one upload
#[derive(Debug, Clone, Copy)]
pub struct StoryPayload<'a> {
    /// Text fields
    pub draft: &'a Draft,
    /// Tags, in insertion order
    pub tags: &'a [String],
    /// Optional media attachment
    pub media: Option<&'a MediaFile>,
}

impl<'a> StoryPayload<'a> {
    /// Assemble a payload
    pub const fn new(draft: &'a Draft, tags: &'a [String], media: Option<&'a MediaFile>) -> Self {
        Self { draft, tags, media }
    }

    /// The tag list serialized as a JSON array of strings
    pub fn tags_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.tags)?)
    }

    /// Text parts in wire order: title, author, storyBody, tags
    pub fn text_fields(&self) -> Result<Vec<(&'static str, String)>> {
        let mut fields: Vec<_> = DraftField::ALL
            .into_iter()
            .map(|field| (field.wire_name(), self.draft.get(field).to_string()))
            .collect();
        fields.push((TAGS_FIELD, self.tags_json()?));
        Ok(fields)
    }

    /// Names of every part that will be sent
    pub fn part_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = DraftField::ALL.into_iter().map(DraftField::wire_name).collect();
        names.push(TAGS_FIELD);
        if self.media.is_some() {
            names.push(MEDIA_FIELD);
        }
        names
    }

    /// Build the `multipart/form-data` body
    pub fn to_multipart(&self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields()? {
            form = form.text(name, value);
        }
        if let Some(media) = self.media {
            let part = Part::stream_with_length(media.data.clone(), media.data.len() as u64)
                .file_name(media.name.clone())
                .mime_str(&media.mime)?;
            form = form.part(MEDIA_FIELD, part);
        }
        Ok(form)
    }
}
