//! Inspect command implementation.
//!
//! Renders the assembled configuration JSON exactly as the compiler would
//! receive it, without invoking anything.

use crate::cli::InspectArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the inspect command.
pub fn execute(args: InspectArgs) -> Result<()> {
    let root = utils::resolve_root(&args.root)?;
    let config = takin_config::assemble(args.mode.into(), &root)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
