//! Git command runner for ratchet.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. All git operations go through this module.

use crate::error::{RatchetError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command, untouched.
    ///
    /// Diff bodies can end in significant whitespace, so this is not trimmed.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(RatchetError::GitError)` - On spawn failure or non-zero exit code
///
/// # Examples
///
/// ```no_run
/// use ratchet::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["diff", "-U0"])?;
/// println!("{}", output.stdout);
/// # Ok::<(), ratchet::error::RatchetError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();
    tracing::trace!(cwd = %cwd.display(), ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            RatchetError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.trimmed().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(RatchetError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the worktree root using `git rev-parse --show-toplevel`.
///
/// Paths in `git diff` output are relative to this directory.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the worktree root
/// * `Err(RatchetError::UserError)` - If `cwd` is not inside a git repository
pub fn worktree_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd.as_ref(), &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(output.trimmed())),
        Err(RatchetError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(RatchetError::UserError(format!(
                "'{}' is not inside a git repository",
                cwd.as_ref().display()
            )))
        }
        Err(e) => Err(e),
    }
}

/// Discard all uncommitted changes to tracked files under `cwd`.
///
/// The repair engine rewrites files in place; restoring brings the worktree
/// back to the pre-repair state before the next violation is repaired.
pub fn restore_worktree<P: AsRef<Path>>(cwd: P) -> Result<()> {
    run_git(cwd, &["restore", "."])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["status", "--porcelain"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]);
        let err = result.unwrap_err();
        assert!(matches!(err, RatchetError::GitError(_)));
    }

    #[test]
    fn test_stdout_keeps_trailing_whitespace() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join("README.md"), "# Test\nend   \n").unwrap();

        let output = run_git(temp_dir.path(), &["diff", "-U0"]).unwrap();

        assert!(output.stdout.ends_with("+end   \n"));
    }

    #[test]
    fn test_worktree_root_from_subdirectory() {
        let temp_dir = create_test_repo();
        let subdir = temp_dir.path().join("subdir").join("nested");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = worktree_root(&subdir).unwrap();

        let expected = temp_dir.path().canonicalize().unwrap();
        assert_eq!(root.canonicalize().unwrap(), expected);
    }

    #[test]
    fn test_worktree_root_outside_repo_returns_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = worktree_root(temp_dir.path()).unwrap_err();
        assert!(matches!(err, RatchetError::UserError(_)));
        assert!(err.to_string().contains("not inside a git repository"));
    }

    #[test]
    fn test_restore_worktree_rolls_back_change() {
        let temp_dir = create_test_repo();
        let readme = temp_dir.path().join("README.md");
        std::fs::write(&readme, "some data").unwrap();

        restore_worktree(temp_dir.path()).unwrap();

        assert_eq!(std::fs::read_to_string(&readme).unwrap(), "# Test\n");
        let status = run_git(temp_dir.path(), &["status", "--porcelain"]).unwrap();
        assert_eq!(status.trimmed(), "");
    }
}
