//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Colour helpers for anything printable
///
/// Output goes through `anstream`, which strips the escapes when the
/// terminal does not support them.
pub trait Stylize {
    /// Highlighted value (ids, URLs, commands)
    fn accent(&self) -> String;
    /// De-emphasized secondary text
    fn muted(&self) -> String;
    /// Section headings
    fn emphasis(&self) -> String;
}

impl<T: Display + ?Sized> Stylize for T {
    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    "✓".green().to_string()
}

/// Red cross
pub fn cross() -> String {
    "✗".red().to_string()
}

/// Yellow bang
pub fn bang() -> String {
    "!".yellow().to_string()
}

/// Blue info marker
pub fn info_mark() -> String {
    "i".blue().to_string()
}

/// Spinner used for in-flight requests
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
