//! Error types for ratchet.
//!
//! Each core module owns a structured error enum. `RatchetError` wraps them
//! for the CLI and maps every failure to an exit code.

use crate::diff::DiffError;
use crate::exit_codes;
use crate::suggestion::SuggestionError;
use crate::violation::ViolationSpecError;
use thiserror::Error;

/// Main error type for ratchet operations.
#[derive(Error, Debug)]
pub enum RatchetError {
    /// Invalid arguments, unreadable input, or a bad config file.
    #[error("{0}")]
    UserError(String),

    /// Git could not be run or exited with a failure.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Violations remain in changed lines after ratcheting.
    #[error("found {0} repairable violation(s) in changed code")]
    NewViolations(usize),

    /// The diff text could not be parsed.
    #[error("malformed diff: {0}")]
    Diff(#[from] DiffError),

    /// A violation specifier could not be parsed.
    #[error("invalid violation specifier: {0}")]
    ViolationSpec(#[from] ViolationSpecError),

    /// A repair hunk could not be turned into a suggestion.
    #[error("cannot build suggestion: {0}")]
    Suggestion(#[from] SuggestionError),
}

impl RatchetError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RatchetError::UserError(_) => exit_codes::USER_ERROR,
            RatchetError::Diff(_) => exit_codes::USER_ERROR,
            RatchetError::ViolationSpec(_) => exit_codes::USER_ERROR,
            RatchetError::Suggestion(_) => exit_codes::USER_ERROR,
            RatchetError::NewViolations(_) => exit_codes::NEW_VIOLATIONS,
            RatchetError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for ratchet operations.
pub type Result<T> = std::result::Result<T, RatchetError>;
