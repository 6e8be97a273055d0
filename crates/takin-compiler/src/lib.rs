//! # takin-compiler
//!
//! The seam between the assembled configuration and the external compiler.
//!
//! The compiler itself is a collaborator, not part of this workspace: it
//! receives a [`takin_config::BundleConfig`] by value and delivers one or
//! more [`CompileResult`]s through a callback. One result per invocation in a
//! one-shot build; repeated results in watch mode, where the compiler
//! rebuilds on file changes outside this crate's control.
//!
//! [`ProcessCompiler`] is the stock implementation: it launches the compiler
//! executable, hands it the serialized configuration on stdin, and parses
//! line-delimited JSON results from its stdout.

pub mod compiler;
pub mod process;
pub mod result;

pub use compiler::{Compiler, ResultCallback};
pub use process::ProcessCompiler;
pub use result::{AssetInfo, CompileResult, CompileStats, FatalError};

/// Error types for compiler invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The compiler executable could not be launched.
    #[error("failed to launch compiler `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The serialized configuration could not be written to the compiler.
    #[error("failed to hand the configuration to the compiler: {0}")]
    Handoff(#[source] std::io::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize the configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The compiler emitted a result line that does not parse.
    #[error("malformed compiler result: {0}")]
    MalformedResult(#[source] serde_json::Error),

    /// Reading the compiler's output failed.
    #[error("I/O error while reading compiler output: {0}")]
    Io(#[from] std::io::Error),

    /// The compiler exited without delivering any result.
    #[error("compiler `{command}` produced no result (exit status: {status})")]
    NoResult {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Result type alias for compiler invocation.
pub type Result<T> = std::result::Result<T, Error>;
