//! takin CLI entry point.
//!
//! Parses the command line, initializes logging and color support, and
//! dispatches to the selected command.

use clap::Parser;
use miette::Result;
use takin_cli::{cli, commands, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors();

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Dev(dev_args) => commands::dev_execute(dev_args),
        cli::Command::Inspect(inspect_args) => commands::inspect_execute(inspect_args),
    };

    result.map_err(miette::Report::new)
}
