//! Authentication for the admin API
//!
//! Supports a stored bearer token and an environment override.

mod token;

pub use token::{AuthToken, TOKEN_ENV_VAR, clear_auth_token, get_auth_token, save_auth_token};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the client-side store
    Store,
    /// Token from environment variable
    EnvVar,
}
