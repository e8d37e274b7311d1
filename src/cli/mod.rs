//! CLI argument parsing for ratchet.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Ratchet: keep static-analysis repairs focused on changed code.
///
/// A repair engine reports violations across a whole checkout. Ratchet keeps
/// only those inside lines changed since a baseline commit, and turns
/// single-violation repair diffs into inline review suggestions.
#[derive(Parser, Debug)]
#[command(name = "ratchet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of `.ratchet.yaml` at the worktree root.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ratchet.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a zero-context diff and print its hunks as JSON.
    ///
    /// Reads the diff from a file, from stdin with `-`, or runs
    /// `git diff -U0` in the current worktree.
    Hunks(HunksArgs),

    /// Keep only violations located in lines changed since a baseline.
    ///
    /// Prints the retained violation specifiers grouped by rule key and
    /// exits with code 2 when any remain.
    Filter(FilterArgs),

    /// Turn a single-violation repair diff into review suggestions.
    ///
    /// Prints one suggestion per hunk of the repair as JSON, or as review
    /// comment bodies with `--message`.
    Suggest(SuggestArgs),
}

/// Arguments for the `hunks` command.
#[derive(Parser, Debug)]
pub struct HunksArgs {
    /// Diff file to parse (`-` for stdin). Defaults to the working-tree diff.
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Diff the worktree against this commitish instead of the index.
    #[arg(long, value_name = "COMMITISH", conflicts_with = "diff")]
    pub against: Option<String>,
}

/// Arguments for the `filter` command.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// File of newline-separated violation specifiers (`-` for stdin).
    #[arg(long, value_name = "FILE")]
    pub specs: PathBuf,

    /// Diff file describing the changed lines (`-` for stdin).
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Baseline commitish; changed lines come from `git diff -U0 <commitish>`.
    #[arg(long, value_name = "COMMITISH", conflicts_with = "diff")]
    pub ratchet_from: Option<String>,

    /// Directory the specifier paths are relative to. Defaults to the worktree root.
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,
}

/// Arguments for the `suggest` command.
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Specifier of the repaired violation.
    #[arg(long, value_name = "SPEC")]
    pub spec: String,

    /// Repair diff file (`-` for stdin). Defaults to the working-tree diff.
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Directory inside the worktree to run git in. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Print review comment bodies instead of JSON.
    #[arg(long)]
    pub message: bool,

    /// Run `git restore .` once the suggestions are built.
    #[arg(long, conflicts_with = "diff")]
    pub restore: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
