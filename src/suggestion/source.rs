//! Read access to pre-repair file content.

use crate::git::run_git;
use std::io;
use std::path::{Path, PathBuf};

/// Source of original file lines, keyed by repository-relative path.
pub trait LineSource {
    /// Return line `line_number` (1-based) of `file`, or `None` if the file
    /// is shorter than that.
    fn line(&self, file: &str, line_number: usize) -> io::Result<Option<String>>;
}

/// Reads lines from files under a worktree root.
#[derive(Debug, Clone)]
pub struct WorktreeFiles {
    root: PathBuf,
}

impl WorktreeFiles {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for WorktreeFiles {
    fn line(&self, file: &str, line_number: usize) -> io::Result<Option<String>> {
        let Some(index) = line_number.checked_sub(1) else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(self.root.join(file))?;
        Ok(content.lines().nth(index).map(str::to_string))
    }
}

/// Reads lines from the git index of a worktree.
///
/// The index holds the old side of `git diff` output, so anchors resolve
/// against the pre-repair content even after the worktree was rewritten.
#[derive(Debug, Clone)]
pub struct IndexFiles {
    worktree_root: PathBuf,
}

impl IndexFiles {
    pub fn new<P: AsRef<Path>>(worktree_root: P) -> Self {
        Self {
            worktree_root: worktree_root.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for IndexFiles {
    fn line(&self, file: &str, line_number: usize) -> io::Result<Option<String>> {
        let Some(index) = line_number.checked_sub(1) else {
            return Ok(None);
        };
        let object = format!(":{}", file);
        let output = run_git(&self.worktree_root, &["show", &object])
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(output.stdout.lines().nth(index).map(str::to_string))
    }
}
