//! Configuration model for ratchet.
//!
//! This module defines the Config struct that represents `.ratchet.yaml` at
//! the worktree root. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values.

mod model;
mod operations;


pub use model::{CONFIG_FILE_NAME, Config};
