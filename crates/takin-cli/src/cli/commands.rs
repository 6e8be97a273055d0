use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::Mode;

/// Available takin subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a production build
    ///
    /// Assembles the production configuration (chunk splitting, minification,
    /// extracted styles) and invokes the compiler once.
    Build(BuildArgs),

    /// Compile continuously in development mode
    ///
    /// Assembles the development configuration (inline source maps, watch
    /// mode) and invokes the compiler; the compiler rebuilds on file changes
    /// and a fresh report is rendered per rebuild.
    Dev(DevArgs),

    /// Print the assembled configuration without compiling
    ///
    /// Renders the configuration JSON exactly as the compiler would receive
    /// it. Useful for diffing modes and debugging the assembly.
    Inspect(InspectArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root directory
    ///
    /// Entry scripts are expected under src/scripts/ and static assets under
    /// src/static/; output lands under dist/.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// External compiler executable
    ///
    /// The command receives the configuration JSON on stdin and must answer
    /// with one result JSON per line on stdout.
    #[arg(long, env = "TAKIN_COMPILER", value_name = "CMD", default_value = "takin-compile")]
    pub compiler: String,

    /// Extra argument passed to the compiler (repeatable)
    #[arg(
        long = "compiler-arg",
        value_name = "ARG",
        allow_hyphen_values = true
    )]
    pub compiler_args: Vec<String>,
}

/// Arguments for the dev command
#[derive(Args, Debug)]
pub struct DevArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// External compiler executable
    #[arg(long, env = "TAKIN_COMPILER", value_name = "CMD", default_value = "takin-compile")]
    pub compiler: String,

    /// Extra argument passed to the compiler (repeatable)
    #[arg(
        long = "compiler-arg",
        value_name = "ARG",
        allow_hyphen_values = true
    )]
    pub compiler_args: Vec<String>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Mode to assemble for
    #[arg(long, value_enum, default_value = "production")]
    pub mode: Mode,
}
