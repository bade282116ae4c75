//! Progress spinner shown on stderr while the tools run.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::inventory::CollectProgress;

/// A progress spinner for the collection stages.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (for non-TTY or JSON output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Show a collection stage as `[i/n] label`.
    pub fn stage(&self, progress: CollectProgress<'_>) {
        self.set_message(&stage_message(progress));
    }

    /// Remove the spinner so the report starts on a clean line.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn stage_message(progress: CollectProgress<'_>) -> String {
    format!(
        "[{}/{}] {}",
        progress.index + 1,
        progress.total,
        progress.stage
    )
}
