//! Client configuration
//!
//! Loaded from `$CONFIG_DIR/storyform/config.toml`, then overridden by
//! environment variables:
//!
//! ```toml
//! api_url = "https://admin.example.com"
//! token_key = "authToken"
//! stories_key = "createdStories"
//! storage_path = "/home/me/.local/share/storyform/storage.json"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Environment variable overriding `api_url`
pub const API_URL_ENV_VAR: &str = "STORYFORM_API_URL";
/// Environment variable overriding `storage_path`
pub const STORAGE_ENV_VAR: &str = "STORYFORM_STORAGE";

/// Default store key for the bearer token
pub const DEFAULT_TOKEN_KEY: &str = "authToken";
/// Default store key for the fallback cache
pub const DEFAULT_STORIES_KEY: &str = "createdStories";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    token_key: Option<String>,
    stories_key: Option<String>,
    storage_path: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the admin API, if configured
    pub api_url: Option<Url>,
    /// Store key holding the bearer token
    pub token_key: String,
    /// Store key holding the fallback cache
    pub stories_key: String,
    /// Backing file of the client-side store
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            stories_key: DEFAULT_STORIES_KEY.to_string(),
            storage_path: default_storage_path(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// With an explicit `path` the file must exist. Otherwise the default
    /// location is used when present. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML document, filling unspecified values with defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            api_url: file.api_url.as_deref().map(parse_api_url).transpose()?,
            token_key: file.token_key.unwrap_or(defaults.token_key),
            stories_key: file.stories_key.unwrap_or(defaults.stories_key),
            storage_path: file.storage_path.unwrap_or(defaults.storage_path),
        })
    }

    fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading config");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var(API_URL_ENV_VAR) {
            debug!("api_url overridden by {API_URL_ENV_VAR}");
            self.api_url = Some(parse_api_url(&url)?);
        }
        if let Ok(path) = env::var(STORAGE_ENV_VAR) {
            debug!("storage_path overridden by {STORAGE_ENV_VAR}");
            self.storage_path = PathBuf::from(path);
        }
        Ok(())
    }

    /// The API base URL, or a config error explaining how to set it
    pub fn require_api_url(&self) -> Result<&Url> {
        self.api_url.as_ref().ok_or_else(|| {
            Error::Config(format!(
                "no API URL configured. Set {API_URL_ENV_VAR} or api_url in {}",
                default_config_path().map_or_else(
                    || "config.toml".to_string(),
                    |p| p.display().to_string()
                )
            ))
        })
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| Error::Config(format!("invalid api_url: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "api_url must be http or https, got {other}"
        ))),
    }
}

/// `$CONFIG_DIR/storyform/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("storyform").join("config.toml"))
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storyform")
        .join("storage.json")
}
