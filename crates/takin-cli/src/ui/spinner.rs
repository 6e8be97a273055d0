//! Simple spinner for tasks without known duration.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

/// Spinner shown while the external compiler runs a one-shot build.
///
/// Cleared (not finished) before the report prints so the report starts on a
/// clean line.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("valid template")
                .tick_strings(&["◐", "◓", "◑", "◒"]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Update the message while the spinner runs.
    pub fn set_message(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Finish with a success message and a green checkmark.
    pub fn finish(&self, message: &str) {
        self.pb
            .finish_with_message(format!("{} {}", "✓".green(), message));
    }

    /// Finish with an error message and a red X.
    pub fn fail(&self, message: &str) {
        self.pb
            .finish_with_message(format!("{} {}", "✗".red(), message));
    }

    /// Remove the spinner without leaving a line behind.
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_lifecycle_does_not_panic() {
        let spinner = Spinner::new("Compiling...");
        spinner.set_message("Still compiling...");
        spinner.finish("Done");

        let spinner = Spinner::new("Compiling...");
        spinner.clear();

        let spinner = Spinner::new("Compiling...");
        spinner.fail("Failed");
    }
}
