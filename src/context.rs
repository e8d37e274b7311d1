//! Worktree context resolution for ratchet commands.
//!
//! Diff paths are relative to the git worktree root, while violation
//! specifiers are relative to the analyzed source directory. This module
//! resolves both to absolute paths from wherever the command is invoked.

use crate::config::Config;
use crate::error::{RatchetError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a ratchet invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory the command was invoked in.
    pub cwd: PathBuf,

    /// Root of the git worktree containing `cwd`.
    pub worktree_root: PathBuf,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RunContext)` - Successfully resolved context
    /// * `Err(RatchetError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(current_dir()?)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = absolutize(cwd.as_ref())?;
        let worktree_root = absolutize(&git::worktree_root(&cwd)?)?;

        Ok(Self { cwd, worktree_root })
    }

    /// Directory violation specifier paths are relative to.
    ///
    /// A relative `source` is taken from `cwd`; without one, the worktree root.
    pub fn source_root(&self, source: Option<&Path>) -> Result<PathBuf> {
        match source {
            Some(dir) => absolutize(&self.cwd.join(dir)),
            None => Ok(self.worktree_root.clone()),
        }
    }

    /// Load the config given by `--config`, or `.ratchet.yaml` at the worktree root.
    pub fn load_config(&self, config_path: Option<&Path>) -> Result<Config> {
        match config_path {
            Some(path) => Config::load(self.cwd.join(path)),
            None => Config::load_or_default(&self.worktree_root),
        }
    }
}

/// The process working directory.
pub fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        RatchetError::UserError(format!("failed to get current working directory: {}", e))
    })
}

// Canonical form so diff-derived and specifier-derived paths compare equal
fn absolutize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| {
        RatchetError::UserError(format!("cannot resolve '{}': {}", path.display(), e))
    })
}
