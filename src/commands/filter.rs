//! Implementation of the `ratchet filter` command.
//!
//! Reads violation specifiers reported by the analysis engine and keeps those
//! located in lines changed since the ratchet baseline.
//!
//! # Changed-line source
//!
//! 1. `--diff <file>`: the given zero-context diff
//! 2. `--ratchet-from <commitish>`: `git diff -U0 <commitish>` in the worktree
//! 3. `ratchet_from` in the config, same as above
//!
//! With none of these there is no baseline and every violation is retained.

use super::{is_stdin, read_input, to_json};
use crate::cli::FilterArgs;
use crate::context::RunContext;
use crate::diff::diff_against;
use crate::error::{RatchetError, Result};
use crate::ratchet::{ChangedLineIndex, filter_by_ratchet, group_by_rule};
use crate::violation::{ViolationSpec, parse_spec_list};
use std::collections::BTreeMap;
use std::path::Path;

/// Execute the `ratchet filter` command.
///
/// Prints the retained specifiers grouped by rule key, then fails with
/// `RatchetError::NewViolations` (exit code 2) if any were retained.
pub fn cmd_filter(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    let ctx = RunContext::resolve()?;
    let retained = ratchet_specs(&args, &ctx, config_path)?;

    println!("{}", to_json(&retained)?);

    let count: usize = retained.values().map(Vec::len).sum();
    if count > 0 {
        return Err(RatchetError::NewViolations(count));
    }

    tracing::info!("no repairable violations in changed code");
    Ok(())
}

/// Parse the specifiers named by `args` and keep the ratcheted ones.
pub(crate) fn ratchet_specs(
    args: &FilterArgs,
    ctx: &RunContext,
    config_path: Option<&Path>,
) -> Result<BTreeMap<u32, Vec<ViolationSpec>>> {
    if is_stdin(&args.specs) && args.diff.as_deref().is_some_and(is_stdin) {
        return Err(RatchetError::UserError(
            "--specs and --diff cannot both be read from stdin".to_string(),
        ));
    }

    let config = ctx.load_config(config_path)?;
    let specs = parse_spec_list(&read_input(&args.specs)?)?;
    let grouped = group_by_rule(specs);
    tracing::info!(rules = grouped.len(), "read violation specifiers");

    let baseline = args.ratchet_from.as_deref().or(config.ratchet_from.as_deref());
    let index = match (&args.diff, baseline) {
        (Some(path), _) => ChangedLineIndex::from_diff(&read_input(path)?, &ctx.worktree_root)?,
        (None, Some(commitish)) => {
            let hunks = diff_against(&ctx.worktree_root, commitish)?;
            ChangedLineIndex::from_hunks(&hunks, &ctx.worktree_root)
        }
        (None, None) => {
            tracing::info!("no ratchet baseline, retaining all violations");
            return Ok(grouped);
        }
    };

    let source_root = ctx.source_root(args.source.as_deref())?;
    let excludes = config.exclude_globs()?;
    Ok(filter_by_ratchet(grouped, &index, source_root, &excludes))
}
