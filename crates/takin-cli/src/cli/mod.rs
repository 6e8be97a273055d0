//! Command-line interface definition.
//!
//! The complete CLI structure via clap's derive macros.
//!
//! # Command Structure
//!
//! - `takin build` - one-shot production compile
//! - `takin dev` - continuous development compile (watch mode)
//! - `takin inspect` - print the assembled configuration without compiling

mod commands;
pub mod enums;
#[cfg(test)]
mod tests;

use clap::Parser;

pub use commands::{BuildArgs, Command, DevArgs, InspectArgs};
pub use enums::Mode;

/// takin - build-configuration assembler for front-end asset pipelines
#[derive(Parser, Debug)]
#[command(
    name = "takin",
    version,
    about = "Assembles a bundler configuration and reports the compile",
    long_about = "takin turns a fixed set of entry scripts and static-asset directories\n\
                  into a complete bundler configuration, hands it to an external compiler,\n\
                  and renders the resulting asset manifest in human-readable form."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
