//! Diff parsing primitives for ratchet.
//!
//! This module turns zero-context unified diffs (`git diff -U0`) into
//! structured hunks. It backs both modes of the tool:
//! - ratchet filtering, which needs the new-side ranges touched since a
//!   baseline commit
//! - suggestion building, which needs the old-side range and the literal
//!   added lines of a single-violation repair
//!
//! The parsing is deterministic and supports:
//! - Omitted hunk counts (one line) and zero counts (empty, anchored range)
//! - New and deleted files (`/dev/null` on either side)
//! - Single-file diffs that carry only a `+++` marker
//! - `diff --git` boundaries, including binary-file sections without hunks

mod api;
mod helpers;
mod parser;


// Re-export public API
pub use api::{DiffError, Hunk, HunkShape, diff_against, working_tree_diff};
pub use helpers::{HunkHeader, parse_hunk_header};
pub use parser::parse_diff_hunks;
