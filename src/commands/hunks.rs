//! Implementation of the `ratchet hunks` command.
//!
//! Prints the hunks of a zero-context diff as JSON, mostly for inspecting what
//! the ratchet and suggestion commands will see.

use super::{read_input, to_json};
use crate::cli::HunksArgs;
use crate::context::current_dir;
use crate::diff::{Hunk, diff_against, parse_diff_hunks, working_tree_diff};
use crate::error::Result;
use std::path::Path;

/// Execute the `ratchet hunks` command.
pub fn cmd_hunks(args: HunksArgs) -> Result<()> {
    let cwd = current_dir()?;
    let hunks = collect_hunks(&args, &cwd)?;
    println!("{}", to_json(&hunks)?);
    Ok(())
}

/// Hunks from the `--diff` input, or from git run in `cwd`.
pub(crate) fn collect_hunks(args: &HunksArgs, cwd: &Path) -> Result<Vec<Hunk>> {
    let hunks = match (&args.diff, &args.against) {
        (Some(path), _) => parse_diff_hunks(&read_input(path)?)?,
        (None, Some(commitish)) => diff_against(cwd, commitish)?,
        (None, None) => working_tree_diff(cwd)?,
    };

    tracing::info!(hunks = hunks.len(), "parsed diff");
    Ok(hunks)
}
