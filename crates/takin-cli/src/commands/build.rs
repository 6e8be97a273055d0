//! Build command implementation.
//!
//! Assembles the production configuration, hands it to the external compiler,
//! and renders the compile report for the single delivered result.

use takin_compiler::{Compiler, ProcessCompiler};
use takin_config::BuildMode;

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the build command.
///
/// # Build Process
///
/// 1. Resolve and validate the project root
/// 2. Assemble the production configuration
/// 3. Invoke the compiler (configuration ownership transfers here)
/// 4. Render the report from the compiler's result callback
pub fn execute(args: BuildArgs) -> Result<()> {
    let root = utils::resolve_root(&args.root)?;

    ui::info(&format!("Building {}", root.display()));
    let config = takin_config::assemble(BuildMode::Production, &root)?;
    tracing::debug!(
        entries = config.entry.len(),
        rules = config.module.rules.len(),
        "production configuration assembled"
    );

    let compiler =
        ProcessCompiler::new(args.compiler.as_str()).args(args.compiler_args.iter().cloned());

    let mut spinner = Some(ui::Spinner::new("Compiling..."));
    let outcome = compiler.compile(config, &mut |result| {
        if let Some(spinner) = spinner.take() {
            spinner.clear();
        }
        ui::report(&result);
    });
    if let Some(spinner) = spinner.take() {
        spinner.clear();
    }
    outcome?;

    Ok(())
}
