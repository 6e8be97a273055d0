//! Subprocess-backed compiler.

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use takin_config::BundleConfig;

use crate::compiler::{Compiler, ResultCallback};
use crate::result::CompileResult;
use crate::{Error, Result};

/// Runs the external compiler executable.
///
/// The assembled configuration is serialized to JSON and written to the
/// child's stdin; the child answers with one JSON result per line on stdout.
/// A one-shot build emits a single line and exits; a watch-mode build stays
/// alive and emits a line per rebuild, each delivered to the callback as it
/// arrives.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
    command: String,
    args: Vec<String>,
}

impl ProcessCompiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument to the compiler command line.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append arguments to the compiler command line.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Compiler for ProcessCompiler {
    fn compile(&self, config: BundleConfig, on_result: &mut ResultCallback<'_>) -> Result<()> {
        let payload = serde_json::to_vec(&config)?;

        tracing::debug!(command = %self.command, "launching compiler");
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // Hand the configuration over and close stdin; the child sees EOF
        // and owns the configuration from here on.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&payload).map_err(Error::Handoff)?;
        }

        let stdout = child.stdout.take().ok_or_else(|| {
            Error::Handoff(std::io::Error::other("compiler stdout was not captured"))
        })?;

        let mut delivered = 0usize;
        for line in BufReader::new(stdout).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let result: CompileResult =
                serde_json::from_str(&line).map_err(Error::MalformedResult)?;
            delivered += 1;
            on_result(result);
        }

        let status = child.wait()?;
        if delivered == 0 {
            return Err(Error::NoResult {
                command: self.command.clone(),
                status,
            });
        }
        tracing::debug!(results = delivered, %status, "compiler finished");
        Ok(())
    }
}
