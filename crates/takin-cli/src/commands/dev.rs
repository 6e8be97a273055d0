//! Dev command implementation.
//!
//! Assembles the development configuration (inline source maps, watch mode)
//! and invokes the compiler. The compiler rebuilds on file changes and
//! delivers a result per rebuild; a fresh report renders for each. The call
//! blocks for the lifetime of the watch; ending it is a process concern
//! (Ctrl-C), not a takin API.

use takin_compiler::{Compiler, ProcessCompiler};
use takin_config::BuildMode;

use crate::cli::DevArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the dev command.
pub fn execute(args: DevArgs) -> Result<()> {
    let root = utils::resolve_root(&args.root)?;

    ui::info(&format!("Watching {}", root.display()));
    let config = takin_config::assemble(BuildMode::Development, &root)?;
    tracing::debug!(
        entries = config.entry.len(),
        watch = config.watch,
        "development configuration assembled"
    );

    let compiler =
        ProcessCompiler::new(args.compiler.as_str()).args(args.compiler_args.iter().cloned());

    compiler.compile(config, &mut |result| ui::report(&result))?;

    Ok(())
}
