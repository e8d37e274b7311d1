//! Ratchet filtering: keep only violations located in changed lines.
//!
//! A diff against the baseline commit is turned into a [`ChangedLineIndex`]
//! (absolute path to new-side ranges). A violation is ratcheted in when its
//! line span overlaps any changed range of its file.

mod filter;
mod index;

#[cfg(test)]
mod tests;

pub use filter::{ExcludeGlobs, filter_by_ratchet, group_by_rule, is_ratcheted_in};
pub use index::ChangedLineIndex;
