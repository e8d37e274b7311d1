//! Conversion of repair hunks into patch suggestions.

use super::source::LineSource;
use crate::diff::{Hunk, HunkShape};
use crate::range::LineRange;
use crate::violation::ViolationSpec;
use serde::Serialize;
use std::io;
use thiserror::Error;

/// A proposed replacement for a span of existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchSuggestion {
    /// Old-side lines to replace. Always covers at least one line.
    pub lines_to_replace: LineRange,
    /// Repository-relative path of the file being changed.
    pub file: String,
    /// The replacement text as a fenced `suggestion` block.
    pub suggestion: String,
    /// The violation whose repair produced this suggestion.
    pub violation_spec: ViolationSpec,
}

/// Errors produced while turning a hunk into a suggestion.
#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error("repair of {spec} produced a hunk with no old lines and no additions")]
    EmptyHunk { spec: String },

    #[error("repair of {spec} creates a new file, there are no existing lines to replace")]
    MissingOldSide { spec: String },

    #[error("'{file}' has no line {line} to anchor the insertion on")]
    AnchorLineMissing { file: String, line: usize },

    #[error("failed to read '{file}': {source}")]
    Read {
        file: String,
        #[source]
        source: io::Error,
    },
}

/// Build the suggestion for one hunk of a single-violation repair.
///
/// - Replacement: the additions replace the old-side range.
/// - Pure deletion: an empty block replaces the old-side range.
/// - Pure insertion after line L: line L is replaced by itself followed by
///   the additions. When the first addition is identical to line L it is
///   taken to be the anchor itself and not repeated, so an insertion that
///   genuinely starts with a copy of line L comes out one line short.
///   An insertion before the first line replaces line 1 by the additions
///   followed by line 1.
///
/// # Errors
///
/// * `SuggestionError::EmptyHunk` - The hunk neither removes nor adds lines
/// * `SuggestionError::MissingOldSide` - The hunk creates its file
/// * `SuggestionError::AnchorLineMissing` - The anchor line is past the end
///   of the original file
/// * `SuggestionError::Read` - The original file could not be read
pub fn build_suggestion<S: LineSource + ?Sized>(
    hunk: &Hunk,
    spec: &ViolationSpec,
    lines: &S,
) -> Result<PatchSuggestion, SuggestionError> {
    let shape = hunk.shape();
    let (file, old_range) = match (shape, hunk.old_file.as_deref()) {
        (HunkShape::Empty, _) => {
            return Err(SuggestionError::EmptyHunk {
                spec: spec.to_string(),
            });
        }
        (_, None) => {
            return Err(SuggestionError::MissingOldSide {
                spec: spec.to_string(),
            });
        }
        // `-0,0` on an existing file inserts before line 1
        (_, Some(file)) => (file, hunk.old_range.unwrap_or(LineRange::empty_at(0))),
    };

    // A pure deletion joins to the empty string
    let (lines_to_replace, text) = if old_range.is_empty() {
        insertion_with_anchor(hunk, file, old_range.start(), lines)?
    } else {
        (old_range, hunk.additions.join("\n"))
    };

    tracing::debug!(
        spec = %spec,
        file,
        ?shape,
        lines = %lines_to_replace,
        "built patch suggestion"
    );

    Ok(PatchSuggestion {
        lines_to_replace,
        file: file.to_string(),
        suggestion: format!("```suggestion\n{}\n```", text),
        violation_spec: spec.clone(),
    })
}

/// Build one suggestion per hunk of a repair, all tagged with `spec`.
///
/// A repair touching disjoint regions yields several suggestions.
pub fn suggestions_for_repair<S: LineSource + ?Sized>(
    hunks: &[Hunk],
    spec: &ViolationSpec,
    lines: &S,
) -> Result<Vec<PatchSuggestion>, SuggestionError> {
    hunks
        .iter()
        .map(|hunk| build_suggestion(hunk, spec, lines))
        .collect()
}

fn insertion_with_anchor<S: LineSource + ?Sized>(
    hunk: &Hunk,
    file: &str,
    anchor: usize,
    lines: &S,
) -> Result<(LineRange, String), SuggestionError> {
    let additions = hunk.additions.join("\n");

    if anchor == 0 {
        let first_line = read_anchor(lines, file, 1)?;
        return Ok((LineRange::single(1), format!("{}\n{}", additions, first_line)));
    }

    let span_end = anchor
        .checked_add(1)
        .ok_or_else(|| SuggestionError::AnchorLineMissing {
            file: file.to_string(),
            line: anchor,
        })?;
    let anchor_line = read_anchor(lines, file, anchor)?;

    // Known limitation: a repair that really inserts a copy of the anchor
    // line first (anchor `}`, additions `}`, `x`) loses that copy.
    let text = if hunk.additions.first() == Some(&anchor_line) {
        additions
    } else {
        format!("{}\n{}", anchor_line, additions)
    };

    Ok((LineRange::new(anchor, span_end), text))
}

fn read_anchor<S: LineSource + ?Sized>(
    lines: &S,
    file: &str,
    line: usize,
) -> Result<String, SuggestionError> {
    lines
        .line(file, line)
        .map_err(|source| SuggestionError::Read {
            file: file.to_string(),
            source,
        })?
        .ok_or_else(|| SuggestionError::AnchorLineMissing {
            file: file.to_string(),
            line,
        })
}
