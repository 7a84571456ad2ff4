//! Client-side key-value storage
//!
//! Durable string storage injected into the auth, cache and form layers.
//! [`FileStore`] persists to a JSON file; [`MemoryStore`] is process-local.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value store
///
/// Implementations must be safe to share between the controller and
/// whatever else reads the same keys.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
