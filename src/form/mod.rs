//! Story submission form
//!
//! Holds the draft, tag list and media attachment, and drives the
//! validate → upload → cache → reset workflow.

mod controller;
mod media;
mod tags;

pub use controller::{ERROR_MESSAGE, FormContext, PENDING_MESSAGE, SUCCESS_MESSAGE, StoryForm};
pub use media::{MediaAttachment, ObjectUrlRegistry, PreviewProvider, PreviewUri};
pub use tags::TagSet;
