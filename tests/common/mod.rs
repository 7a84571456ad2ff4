//! Common test utilities for storyform tests

pub mod mock_service;
pub mod stores;
pub mod toasts;

// Re-exports for convenience - not all test binaries use all exports
#[allow(unused_imports)]
pub use mock_service::{MockResponse, MockStoryService, RecordedCall};
#[allow(unused_imports)]
pub use stores::ReadOnlyStore;
#[allow(unused_imports)]
pub use toasts::RecordingToasts;
