//! Terminal UI: status messages, the build spinner, and the compile report.
//!
//! Status messages go to stderr; the compile report is the command's one
//! persisted artifact and goes to stdout. Environment detection (CI, TTY)
//! degrades gracefully when terminal features are unavailable.

mod format;
mod messages;
mod report;
mod spinner;

pub use format::{format_clock, format_elapsed, scaled_size, SizeTier};
pub use messages::{debug, error, info, success, warning};
pub use report::report;
pub use spinner::Spinner;

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falling back to terminal
/// capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// `owo-colors` respects `NO_COLOR` and terminal capabilities on its own;
/// this performs the detection early so misconfigured terminals fail fast.
pub fn init_colors() {
    let _ = should_use_color();
}
