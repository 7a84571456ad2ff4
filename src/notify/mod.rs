//! Toast notifications
//!
//! [`Notifier`] is a stateless facade: every call merges caller overrides
//! over [`ToastOptions::default`] and hands the toast to a [`ToastSink`].
//! Different front ends (terminal, tests) implement the sink.

mod options;

pub use options::{DEFAULT_AUTO_CLOSE, Position, ToastOptions, ToastOverrides};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Something needs attention
    Warning,
    /// Neutral information
    Info,
    /// Operation in progress
    Loading,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Loading => "loading",
        };
        f.write_str(s)
    }
}

/// Handle returned by a sink, used to update a toast in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// A toast ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity level
    pub severity: Severity,
    /// Message text
    pub message: String,
    /// Resolved presentation options
    pub options: ToastOptions,
}

/// Something that can display toasts
///
/// Implement this trait to render notifications.
/// - CLI implementations can print to the terminal
/// - Tests can record what was shown
pub trait ToastSink: Send + Sync {
    /// Display a new toast
    fn show(&self, toast: &Toast) -> ToastId;

    /// Replace the content of a toast previously returned by [`show`]
    ///
    /// [`show`]: Self::show
    fn update(&self, id: ToastId, toast: &Toast);
}

/// Sink that drops every toast
pub struct NoopToasts;

impl ToastSink for NoopToasts {
    fn show(&self, _toast: &Toast) -> ToastId {
        ToastId(0)
    }

    fn update(&self, _id: ToastId, _toast: &Toast) {}
}

/// Messages for the three states of an in-flight operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromiseMessages {
    /// Shown while the operation runs
    pub pending: String,
    /// Shown when it resolves to `Ok`
    pub success: String,
    /// Shown when it resolves to `Err`
    pub error: String,
}

impl PromiseMessages {
    /// Build from three messages
    pub fn new(
        pending: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            pending: pending.into(),
            success: success.into(),
            error: error.into(),
        }
    }
}

/// Notification facade with fixed default options
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn ToastSink>,
}

impl Notifier {
    /// Facade over `sink`
    pub fn new(sink: Arc<dyn ToastSink>) -> Self {
        Self { sink }
    }

    /// Facade that shows nothing
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopToasts))
    }

    /// Show a success toast
    pub fn success(&self, message: impl Into<String>, overrides: Option<&ToastOverrides>) -> ToastId {
        self.show(Severity::Success, message.into(), overrides)
    }

    /// Show an error toast
    pub fn error(&self, message: impl Into<String>, overrides: Option<&ToastOverrides>) -> ToastId {
        self.show(Severity::Error, message.into(), overrides)
    }

    /// Show a warning toast
    pub fn warning(&self, message: impl Into<String>, overrides: Option<&ToastOverrides>) -> ToastId {
        self.show(Severity::Warning, message.into(), overrides)
    }

    /// Show an info toast
    pub fn info(&self, message: impl Into<String>, overrides: Option<&ToastOverrides>) -> ToastId {
        self.show(Severity::Info, message.into(), overrides)
    }

    /// Track `future` with a loading toast
    ///
    /// The toast shows `messages.pending` until the future completes, then
    /// switches to `messages.success` or `messages.error`. The future's
    /// output is returned unchanged.
    pub async fn for_future<F, T, E>(
        &self,
        future: F,
        messages: PromiseMessages,
        overrides: Option<&ToastOverrides>,
    ) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
    {
        let options = ToastOptions::with_overrides(overrides);
        let loading = Toast {
            severity: Severity::Loading,
            message: messages.pending,
            options: ToastOptions {
                auto_close: None,
                close_on_click: false,
                draggable: false,
                ..options
            },
        };
        let id = self.sink.show(&loading);

        let output = future.await;

        let (severity, message) = match &output {
            Ok(_) => (Severity::Success, messages.success),
            Err(_) => (Severity::Error, messages.error),
        };
        self.sink.update(
            id,
            &Toast {
                severity,
                message,
                options,
            },
        );
        output
    }

    fn show(
        &self,
        severity: Severity,
        message: String,
        overrides: Option<&ToastOverrides>,
    ) -> ToastId {
        self.sink.show(&Toast {
            severity,
            message,
            options: ToastOptions::with_overrides(overrides),
        })
    }
}
