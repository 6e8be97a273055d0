//! CLI-facing enums and their conversions to core types.

use clap::ValueEnum;
use takin_config::BuildMode;

/// Build mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Inline source maps, watch mode, no optimization phase
    Development,
    /// Chunk splitting and minification, no source maps
    Production,
}

impl From<Mode> for BuildMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Development => BuildMode::Development,
            Mode::Production => BuildMode::Production,
        }
    }
}
