//! takin CLI library.
//!
//! Exposes the pieces the `takin` binary wires together: argument parsing,
//! logging setup, command execution, and the terminal report renderer.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
