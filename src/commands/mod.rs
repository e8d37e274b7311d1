//! Command implementations for ratchet.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input and output helpers they share.

mod filter;
mod hunks;
mod suggest;


pub use filter::cmd_filter;
pub use hunks::cmd_hunks;
pub use suggest::cmd_suggest;

use crate::cli::{Cli, Command};
use crate::error::{RatchetError, Result};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Hunks(args) => cmd_hunks(args),
        Command::Filter(args) => cmd_filter(args, config),
        Command::Suggest(args) => cmd_suggest(args, config),
    }
}

/// Read a whole input file, or stdin when `path` is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| RatchetError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(path).map_err(|e| {
        RatchetError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

pub(crate) fn is_stdin(path: &Path) -> bool {
    path == Path::new(STDIN_PATH)
}

/// Render command output as pretty-printed JSON.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| RatchetError::UserError(format!("failed to serialize output: {}", e)))
}
