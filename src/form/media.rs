//! Media attachment and preview URIs
//!
//! A preview URI is a session-local handle to the selected file's bytes.
//! It must be revoked once the attachment is replaced or cleared.

use crate::types::MediaFile;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Session-local URI pointing at a selected media file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewUri(String);

impl PreviewUri {
    /// Wrap a raw URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// URI text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreviewUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mints and revokes preview URIs
pub trait PreviewProvider: Send + Sync {
    /// Create a preview URI for `file`
    fn create(&self, file: &MediaFile) -> PreviewUri;

    /// Release a URI returned by [`create`](Self::create)
    fn revoke(&self, uri: &PreviewUri);
}

/// In-process registry of `blob:` URIs
#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    live: Mutex<HashMap<PreviewUri, Arc<MediaFile>>>,
}

impl ObjectUrlRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the file behind a live URI
    pub fn resolve(&self, uri: &PreviewUri) -> Option<Arc<MediaFile>> {
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(uri)
            .cloned()
    }

    /// Number of URIs not yet revoked
    pub fn live_count(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl PreviewProvider for ObjectUrlRegistry {
    fn create(&self, file: &MediaFile) -> PreviewUri {
        let uri = PreviewUri(format!("blob:storyform/{}", uuid::Uuid::new_v4()));
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(uri.clone(), Arc::new(file.clone()));
        debug!(%uri, name = %file.name, "created preview");
        uri
    }

    fn revoke(&self, uri: &PreviewUri) {
        if self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(uri)
            .is_some()
        {
            debug!(%uri, "revoked preview");
        }
    }
}

/// Optional selected file plus its preview URI
///
/// Holds at most one live preview; the previous one is revoked whenever the
/// selection changes, and on drop.
pub struct MediaAttachment {
    file: Option<MediaFile>,
    preview: Option<PreviewUri>,
    previews: Arc<dyn PreviewProvider>,
}

impl MediaAttachment {
    /// Empty attachment using `previews` to mint URIs
    pub fn new(previews: Arc<dyn PreviewProvider>) -> Self {
        Self {
            file: None,
            preview: None,
            previews,
        }
    }

    /// Replace the selection
    ///
    /// Any previous preview is revoked; a new one is minted for `Some`.
    pub fn select(&mut self, file: Option<MediaFile>) {
        if let Some(old) = self.preview.take() {
            self.previews.revoke(&old);
        }
        self.preview = file.as_ref().map(|f| self.previews.create(f));
        self.file = file;
    }

    /// Drop the selection and its preview
    pub fn clear(&mut self) {
        self.select(None);
    }

    /// Selected file
    pub const fn file(&self) -> Option<&MediaFile> {
        self.file.as_ref()
    }

    /// Preview URI of the selected file
    pub const fn preview(&self) -> Option<&PreviewUri> {
        self.preview.as_ref()
    }

    /// True when nothing is selected
    pub const fn is_empty(&self) -> bool {
        self.file.is_none()
    }
}

impl fmt::Debug for MediaAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaAttachment")
            .field("file", &self.file.as_ref().map(|m| &m.name))
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

impl Drop for MediaAttachment {
    fn drop(&mut self) {
        if let Some(uri) = self.preview.take() {
            self.previews.revoke(&uri);
        }
    }
}
