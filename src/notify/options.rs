//! Toast presentation options

use std::fmt;
use std::time::Duration;

/// Default auto-close delay
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// Screen corner or edge a toast is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    /// Top right corner
    #[default]
    TopRight,
    /// Top edge, centered
    TopCenter,
    /// Top left corner
    TopLeft,
    /// Bottom right corner
    BottomRight,
    /// Bottom edge, centered
    BottomCenter,
    /// Bottom left corner
    BottomLeft,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TopRight => "top-right",
            Self::TopCenter => "top-center",
            Self::TopLeft => "top-left",
            Self::BottomRight => "bottom-right",
            Self::BottomCenter => "bottom-center",
            Self::BottomLeft => "bottom-left",
        };
        f.write_str(s)
    }
}

/// Fully resolved toast options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ToastOptions {
    /// Where the toast appears
    pub position: Position,
    /// Delay before dismissal; `None` keeps it until closed
    pub auto_close: Option<Duration>,
    /// Hide the countdown bar
    pub hide_progress_bar: bool,
    /// Dismiss when clicked
    pub close_on_click: bool,
    /// Pause the countdown while hovered
    pub pause_on_hover: bool,
    /// Allow swiping the toast away
    pub draggable: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            auto_close: Some(DEFAULT_AUTO_CLOSE),
            hide_progress_bar: false,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
        }
    }
}

impl ToastOptions {
    /// Defaults with `overrides` applied on top
    pub fn with_overrides(overrides: Option<&ToastOverrides>) -> Self {
        let mut options = Self::default();
        if let Some(o) = overrides {
            options.apply(o);
        }
        options
    }

    fn apply(&mut self, o: &ToastOverrides) {
        if let Some(position) = o.position {
            self.position = position;
        }
        if let Some(auto_close) = o.auto_close {
            self.auto_close = auto_close;
        }
        if let Some(v) = o.hide_progress_bar {
            self.hide_progress_bar = v;
        }
        if let Some(v) = o.close_on_click {
            self.close_on_click = v;
        }
        if let Some(v) = o.pause_on_hover {
            self.pause_on_hover = v;
        }
        if let Some(v) = o.draggable {
            self.draggable = v;
        }
    }
}

/// Caller-supplied option overrides; unset fields keep the defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastOverrides {
    /// Override placement
    pub position: Option<Position>,
    /// Override auto-close (`Some(None)` disables it)
    pub auto_close: Option<Option<Duration>>,
    /// Override progress bar visibility
    pub hide_progress_bar: Option<bool>,
    /// Override click-to-dismiss
    pub close_on_click: Option<bool>,
    /// Override pause-on-hover
    pub pause_on_hover: Option<bool>,
    /// Override draggable
    pub draggable: Option<bool>,
}

impl ToastOverrides {
    /// No overrides
    pub const fn new() -> Self {
        Self {
            position: None,
            auto_close: None,
            hide_progress_bar: None,
            close_on_click: None,
            pause_on_hover: None,
            draggable: None,
        }
    }

    /// Set placement
    #[must_use]
    pub const fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the auto-close delay
    #[must_use]
    pub const fn auto_close(mut self, delay: Duration) -> Self {
        self.auto_close = Some(Some(delay));
        self
    }

    /// Keep the toast until dismissed
    #[must_use]
    pub const fn sticky(mut self) -> Self {
        self.auto_close = Some(None);
        self
    }

    /// Show or hide the progress bar
    #[must_use]
    pub const fn hide_progress_bar(mut self, hide: bool) -> Self {
        self.hide_progress_bar = Some(hide);
        self
    }

    /// Enable or disable click-to-dismiss
    #[must_use]
    pub const fn close_on_click(mut self, enabled: bool) -> Self {
        self.close_on_click = Some(enabled);
        self
    }

    /// Enable or disable pause-on-hover
    #[must_use]
    pub const fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = Some(enabled);
        self
    }

    /// Enable or disable dragging
    #[must_use]
    pub const fn draggable(mut self, enabled: bool) -> Self {
        self.draggable = Some(enabled);
        self
    }
}
