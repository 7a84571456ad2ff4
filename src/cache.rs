//! Fallback cache of submitted stories
//!
//! A newest-first JSON array kept in the client-side store, used to display
//! stories when the server copy is unavailable.

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use crate::types::SubmissionResult;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Newest-first list of submission results under one store key
#[derive(Clone)]
pub struct FallbackCache {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FallbackCache {
    /// Cache stored under `key` in `store`
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// All cached stories, newest first
    pub fn load(&self) -> Result<Vec<Value>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw)? {
            Value::Array(items) => Ok(items),
            other => Err(Error::Storage(format!(
                "expected a JSON array under {}, found {}",
                self.key,
                json_kind(&other)
            ))),
        }
    }

    /// Put `result` at the front of the list
    pub fn prepend(&self, result: &SubmissionResult) -> Result<()> {
        let mut items = self.load()?;
        items.insert(0, result.to_json()?);
        self.store.set(&self.key, &serde_json::to_string(&items)?)?;
        debug!(key = %self.key, count = items.len(), "saved story to fallback cache");
        Ok(())
    }

    /// Drop every cached story
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
