//! Terminal toast sink

use crate::cli::style::{bang, check, cross, info_mark, spinner_style};
use anstream::eprintln;
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use storyform::notify::{Severity, Toast, ToastId, ToastSink};

/// Renders toasts on stderr
///
/// Loading toasts become a spinner that is replaced in place when the
/// toast is updated. Placement and timing options have no terminal
/// equivalent and are ignored.
pub struct TerminalToasts {
    next_id: AtomicU64,
    spinners: Mutex<HashMap<ToastId, ProgressBar>>,
}

impl TerminalToasts {
    /// Create a sink
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn print(toast: &Toast) {
        let marker = match toast.severity {
            Severity::Success => check(),
            Severity::Error => cross(),
            Severity::Warning => bang(),
            Severity::Info | Severity::Loading => info_mark(),
        };
        eprintln!("{marker} {}", toast.message);
    }
}

impl Default for TerminalToasts {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSink for TerminalToasts {
    fn show(&self, toast: &Toast) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));

        if toast.severity == Severity::Loading {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.set_message(toast.message.clone());
            spinner.enable_steady_tick(Duration::from_millis(80));
            self.spinners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(id, spinner);
        } else {
            Self::print(toast);
        }
        id
    }

    fn update(&self, id: ToastId, toast: &Toast) {
        let spinner = self
            .spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        Self::print(toast);
    }
}
