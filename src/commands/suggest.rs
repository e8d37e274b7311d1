//! Implementation of the `ratchet suggest` command.
//!
//! Runs after the repair engine has fixed exactly one violation in place.
//! Each hunk of the resulting diff becomes one review suggestion.

use super::{read_input, to_json};
use crate::cli::SuggestArgs;
use crate::config::Config;
use crate::context::{RunContext, current_dir};
use crate::diff::{parse_diff_hunks, working_tree_diff};
use crate::error::Result;
use crate::git::restore_worktree;
use crate::suggestion::{
    IndexFiles, PatchSuggestion, WorktreeFiles, render_review_message, suggestions_for_repair,
};
use crate::violation::ViolationSpec;
use std::path::Path;

/// Execute the `ratchet suggest` command.
pub fn cmd_suggest(args: SuggestArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = current_dir()?;
    let run_dir = args
        .source
        .as_deref()
        .map_or_else(|| cwd.clone(), |source| cwd.join(source));
    let ctx = RunContext::resolve_from(&run_dir)?;
    let config = ctx.load_config(config_path)?;

    let suggestions = build_suggestions(&args, &ctx)?;

    if args.message {
        print!("{}", render_messages(&suggestions, &config));
    } else {
        println!("{}", to_json(&suggestions)?);
    }
    Ok(())
}

/// Build the suggestions for the repaired violation named by `args`.
///
/// With `--restore` the worktree is restored even when building fails.
pub(crate) fn build_suggestions(
    args: &SuggestArgs,
    ctx: &RunContext,
) -> Result<Vec<PatchSuggestion>> {
    let built = suggestions_from_repair(args, ctx);

    if args.restore {
        restore_worktree(&ctx.cwd)?;
        tracing::info!(dir = %ctx.cwd.display(), "restored worktree");
    }

    built
}

fn suggestions_from_repair(args: &SuggestArgs, ctx: &RunContext) -> Result<Vec<PatchSuggestion>> {
    let spec: ViolationSpec = args.spec.parse()?;

    // A diff file carries no index state, read anchors from disk instead
    let suggestions = match &args.diff {
        Some(path) => {
            let hunks = parse_diff_hunks(&read_input(path)?)?;
            suggestions_for_repair(&hunks, &spec, &WorktreeFiles::new(&ctx.worktree_root))?
        }
        None => {
            let hunks = working_tree_diff(&ctx.worktree_root)?;
            suggestions_for_repair(&hunks, &spec, &IndexFiles::new(&ctx.worktree_root))?
        }
    };

    if suggestions.is_empty() {
        tracing::warn!(spec = %spec, "repair produced no changes");
    }
    Ok(suggestions)
}

/// Review comment bodies, separated by blank lines.
pub(crate) fn render_messages(suggestions: &[PatchSuggestion], config: &Config) -> String {
    let template = config.message_template();
    suggestions
        .iter()
        .map(|ps| {
            let title = config.rule_title(ps.violation_spec.rule_key);
            render_review_message(ps, &template, title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
