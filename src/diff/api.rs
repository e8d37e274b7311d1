//! Public types and git-backed entry points for diff parsing.

use crate::error::Result;
use crate::git::run_git;
use crate::range::LineRange;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::parser::parse_diff_hunks;

/// One contiguous changed region of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Repository-relative path on the old side, `None` for `/dev/null` or
    /// when the diff carried no `---` marker.
    pub old_file: Option<String>,
    /// Old-side lines replaced by this hunk. `None` when there is no old
    /// file at all (the hunk creates the file).
    pub old_range: Option<LineRange>,
    /// Repository-relative path on the new side, `None` for `/dev/null`.
    pub new_file: Option<String>,
    /// New-side lines covered by this hunk.
    pub new_range: LineRange,
    /// Added lines in order, without the leading `+`.
    pub additions: Vec<String>,
    /// Removed lines in order, without the leading `-`.
    pub deletions: Vec<String>,
}

/// The three edit shapes a repair hunk can take, plus the degenerate one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkShape {
    /// Old lines are replaced by new lines.
    Replacement,
    /// Old lines are removed and nothing is put back.
    PureDeletion,
    /// Lines are inserted without touching any old line.
    PureInsertion,
    /// Neither old lines nor additions.
    Empty,
}

impl Hunk {
    /// Classify the hunk by its old-side range and its additions.
    pub fn shape(&self) -> HunkShape {
        let replaces_old_lines = self.old_range.is_some_and(|range| !range.is_empty());
        match (replaces_old_lines, self.additions.is_empty()) {
            (true, false) => HunkShape::Replacement,
            (true, true) => HunkShape::PureDeletion,
            (false, false) => HunkShape::PureInsertion,
            (false, true) => HunkShape::Empty,
        }
    }
}

/// Errors produced while parsing diff text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A `@@` line did not match `@@ -a[,b] +c[,d] @@`.
    #[error("line {line_number}: malformed hunk header '{line}'")]
    MalformedHunkHeader { line_number: usize, line: String },
}

/// Parse the hunks changed since `commitish`.
///
/// Runs `git diff -U0 {commitish}`, which compares the working tree against
/// the given commit.
///
/// # Returns
///
/// * `Ok(Vec<Hunk>)` - Hunks in file-then-position order
/// * `Err(RatchetError::GitError)` - Git command failed
/// * `Err(RatchetError::Diff)` - Git produced a diff we cannot parse
pub fn diff_against<P: AsRef<Path>>(cwd: P, commitish: &str) -> Result<Vec<Hunk>> {
    let output = run_git(&cwd, &["diff", "--no-color", "-U0", commitish])?;
    let hunks = parse_diff_hunks(&output.stdout)?;
    tracing::debug!(commitish, hunks = hunks.len(), "parsed ratchet diff");
    Ok(hunks)
}

/// Parse the uncommitted changes of the working tree.
///
/// Used after the repair engine has rewritten files in place.
pub fn working_tree_diff<P: AsRef<Path>>(cwd: P) -> Result<Vec<Hunk>> {
    let output = run_git(&cwd, &["diff", "--no-color", "-U0"])?;
    Ok(parse_diff_hunks(&output.stdout)?)
}
