//! Changed-line index built from diff hunks.

use crate::diff::{DiffError, Hunk, parse_diff_hunks};
use crate::range::LineRange;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mapping from absolute file path to the new-side ranges a diff touched.
///
/// Ranges are kept in hunk order and are neither merged nor deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedLineIndex {
    ranges: HashMap<PathBuf, Vec<LineRange>>,
}

impl ChangedLineIndex {
    /// Build the index from parsed hunks.
    ///
    /// `worktree_root` is the directory the diff paths are relative to.
    /// Hunks with an empty new side (pure deletions, deleted files) are
    /// skipped since they cannot overlap any violation.
    pub fn from_hunks<P: AsRef<Path>>(hunks: &[Hunk], worktree_root: P) -> Self {
        let root = worktree_root.as_ref();
        let mut ranges: HashMap<PathBuf, Vec<LineRange>> = HashMap::new();

        for hunk in hunks {
            let Some(new_file) = &hunk.new_file else {
                continue;
            };
            if hunk.new_range.is_empty() {
                continue;
            }
            ranges
                .entry(root.join(new_file))
                .or_default()
                .push(hunk.new_range);
        }

        Self { ranges }
    }

    /// Parse a zero-context diff and build the index from its hunks.
    pub fn from_diff<P: AsRef<Path>>(diff: &str, worktree_root: P) -> Result<Self, DiffError> {
        let hunks = parse_diff_hunks(diff)?;
        Ok(Self::from_hunks(&hunks, worktree_root))
    }

    /// Changed ranges for `path`, or `None` if the diff did not touch it.
    pub fn ranges_for(&self, path: &Path) -> Option<&[LineRange]> {
        self.ranges.get(path).map(Vec::as_slice)
    }

    /// Files with at least one changed range.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.ranges.keys().map(PathBuf::as_path)
    }

    /// Number of files in the index.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
