//! CLI command implementations

mod auth;
mod stories;
mod style;
mod submit;
mod toast;

pub use auth::{AuthAction, run_auth};
pub use stories::{StoriesOptions, run_stories};
pub use submit::{SubmitOptions, run_submit};
pub use toast::TerminalToasts;
