//! Exit code constants for the ratchet CLI.
//!
//! - 0: Success, nothing new to report
//! - 1: User error (bad args, malformed diff or specifier, bad config)
//! - 2: Repairable violations found in changed lines
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or malformed input.
pub const USER_ERROR: i32 = 1;

/// Violations survived ratcheting; the build should fail.
pub const NEW_VIOLATIONS: i32 = 2;

/// Git operation failure.
pub const GIT_FAILURE: i32 = 3;
