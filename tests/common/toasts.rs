//! Toast sink that records everything

use std::sync::Mutex;
use storyform::notify::{Severity, Toast, ToastId, ToastSink};

#[derive(Default)]
pub struct RecordingToasts {
    toasts: Mutex<Vec<Toast>>,
}

#[allow(dead_code)]
impl RecordingToasts {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    /// The last state of each toast, in order shown
    pub fn severities(&self) -> Vec<Severity> {
        self.toasts().iter().map(|t| t.severity).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().last().cloned()
    }
}

impl ToastSink for RecordingToasts {
    fn show(&self, toast: &Toast) -> ToastId {
        let mut toasts = self.toasts.lock().unwrap();
        toasts.push(toast.clone());
        ToastId(toasts.len() as u64 - 1)
    }

    fn update(&self, id: ToastId, toast: &Toast) {
        let mut toasts = self.toasts.lock().unwrap();
        if let Some(slot) = usize::try_from(id.0).ok().and_then(|i| toasts.get_mut(i)) {
            *slot = toast.clone();
        }
    }
}
