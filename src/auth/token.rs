//! Bearer token lookup

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use std::env;
use std::fmt;
use tracing::debug;

/// Environment variable that overrides the stored token
pub const TOKEN_ENV_VAR: &str = "STORYFORM_TOKEN";

/// Bearer token plus where it came from
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// Raw token value
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

impl AuthToken {
    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Keep tokens out of debug logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Get the bearer token, if any
///
/// Priority:
/// 1. `STORYFORM_TOKEN` environment variable
/// 2. the store, under `key`
///
/// A missing token is not an error: the request goes out unauthenticated and
/// the server decides.
pub fn get_auth_token(store: &dyn KeyValueStore, key: &str) -> Result<Option<AuthToken>> {
    debug!("checking {TOKEN_ENV_VAR} env var");
    if let Ok(token) = env::var(TOKEN_ENV_VAR) {
        let token = token.trim();
        if !token.is_empty() {
            debug!("obtained token from {TOKEN_ENV_VAR} env var");
            return Ok(Some(AuthToken {
                token: token.to_string(),
                source: AuthSource::EnvVar,
            }));
        }
    }

    debug!(key, "checking store for token");
    let token = store
        .get(key)?
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .map(|token| AuthToken {
            token,
            source: AuthSource::Store,
        });

    if token.is_none() {
        debug!("no token found");
    }
    Ok(token)
}

/// Persist `token` under `key`
pub fn save_auth_token(store: &dyn KeyValueStore, key: &str, token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Auth("token is empty".to_string()));
    }
    store.set(key, token)
}

/// Forget the stored token
pub fn clear_auth_token(store: &dyn KeyValueStore, key: &str) -> Result<()> {
    store.remove(key)
}
