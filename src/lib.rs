//! storyform - story submission client
//!
//! Library for composing a story draft (title, author, body, tags, optional
//! media) and submitting it as a multipart upload to an admin API.
//!
//! The submission controller lives in [`form`], toast notifications in
//! [`notify`], and the HTTP seam in [`api`]. Durable client-side state
//! (auth token, fallback cache) goes through the injected [`storage`] layer.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod storage;
pub mod types;
