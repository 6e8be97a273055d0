//! Error handling for the takin CLI.
//!
//! A single `thiserror` hierarchy with automatic conversion from the core
//! crates, plus a `miette::Diagnostic` implementation so failures render with
//! codes and actionable help at the user boundary.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration assembly failed.
    #[error("Configuration error: {0}")]
    Config(#[from] takin_config::Error),

    /// The external compiler could not be driven.
    #[error("Compiler error: {0}")]
    Compiler(#[from] takin_compiler::Error),

    /// The project root does not exist or is not a directory.
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O errors from file system operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl miette::Diagnostic for CliError {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            CliError::Config(_) => "CONFIG_ERROR",
            CliError::Compiler(_) => "COMPILER_ERROR",
            CliError::RootNotFound(_) => "ROOT_NOT_FOUND",
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "JSON_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            CliError::RootNotFound(path) => Some(Box::new(format!(
                "The directory '{}' does not exist. Pass --root <DIR> pointing at the project root.",
                path.display()
            ))),
            CliError::Compiler(takin_compiler::Error::Spawn { command, .. }) => {
                Some(Box::new(format!(
                    "Could not launch '{command}'. Check that it is on PATH, or point --compiler \
                     (or the TAKIN_COMPILER environment variable) at the compiler executable."
                )))
            }
            CliError::Compiler(takin_compiler::Error::MalformedResult(_)) => Some(Box::new(
                "The compiler must print one result JSON per line on stdout.".to_string(),
            )),
            _ => None,
        }
    }
}
