//! Ratchet: keep static-analysis repairs focused on changed code.
//!
//! The library parses zero-context unified diffs into hunks, decides which
//! reported violations lie inside lines changed since a baseline commit, and
//! turns single-violation repair diffs into review suggestions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod range;
pub mod ratchet;
pub mod suggestion;
pub mod violation;

#[cfg(test)]
mod test_support;
