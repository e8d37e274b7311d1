//! Half-open line ranges.
//!
//! Every line span in ratchet uses the same convention: `[start, end)`, with
//! 1-based line numbers. Diff header counts, violation spans and suggestion
//! replacement spans are all converted to this form at the boundary where
//! they are parsed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval of line numbers covering `[start, end)`.
///
/// `start == end` is the empty range. It still carries a position, which a
/// pure insertion uses as its anchor on the old side of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Create a range covering `[start, end)`.
    ///
    /// Callers must uphold `start <= end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted line range [{start}, {end})");
        Self { start, end }
    }

    /// The empty range anchored at `line`.
    pub fn empty_at(line: usize) -> Self {
        Self::new(line, line)
    }

    /// The range covering exactly `line`. `line` must be below `usize::MAX`.
    pub fn single(line: usize) -> Self {
        Self::new(line, line + 1)
    }

    /// The range covering `count` lines starting at `start`.
    pub fn from_start_count(start: usize, count: usize) -> Self {
        Self::new(start, start + count)
    }

    /// Convert a closed `[first, last]` span to a half-open range.
    /// `last` must be below `usize::MAX`.
    pub fn from_inclusive(first: usize, last: usize) -> Self {
        Self::new(first, last + 1)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if the two ranges share at least one line.
    pub fn overlaps(&self, other: &LineRange) -> bool {
        overlaps(self, other)
    }

    /// Returns true if this range overlaps any of `candidates`.
    pub fn overlaps_any(&self, candidates: &[LineRange]) -> bool {
        overlaps_any(self, candidates)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Determine whether two half-open ranges intersect.
///
/// Ranges that only touch (one ends where the other starts) do not overlap.
/// An empty range never overlaps itself, but one strictly inside a nonempty
/// range does.
pub fn overlaps(a: &LineRange, b: &LineRange) -> bool {
    a.start < b.end && b.start < a.end
}

/// Determine whether `sought` overlaps at least one range in `candidates`.
pub fn overlaps_any(sought: &LineRange, candidates: &[LineRange]) -> bool {
    candidates.iter().any(|candidate| overlaps(sought, candidate))
}
