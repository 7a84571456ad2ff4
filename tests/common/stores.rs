//! Store doubles

use storyform::error::{Error, Result};
use storyform::storage::{KeyValueStore, MemoryStore};

/// Store whose writes always fail; reads go to an inner memory store
#[derive(Default)]
pub struct ReadOnlyStore {
    pub inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".to_string()))
    }
}
