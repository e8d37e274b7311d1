//! Core diff parsing logic.
//!
//! The scan is a small state machine over the lines of the diff. Each state
//! owns everything it needs, so the function is pure over its input text.

use super::api::{DiffError, Hunk};
use super::helpers::{parse_file_marker, parse_hunk_header};

/// File names of the diff section currently being scanned.
#[derive(Debug, Clone)]
struct FilePair {
    old: Option<String>,
    new: Option<String>,
}

#[derive(Debug)]
enum ScanState {
    /// Waiting for the `+++` marker of the next file. `old` is `Some` once a
    /// `---` marker has been seen (holding `None` for `/dev/null`).
    AwaitingFileHeaders { old: Option<Option<String>> },
    /// File pair known, no hunk open.
    AwaitingHunkHeader { files: FilePair },
    /// Collecting the body of `hunk`. The remaining counts come from the
    /// header and tell body lines apart from file markers.
    InHunkBody {
        files: FilePair,
        hunk: Hunk,
        remaining_old: usize,
        remaining_new: usize,
    },
}

/// Parse hunks from raw diff output.
///
/// Expects a unified diff computed with zero context lines (`-U0`). Hunks
/// are returned in the order they appear in the input.
///
/// # Returns
///
/// * `Ok(Vec<Hunk>)` - The parsed hunks (empty for an empty diff)
/// * `Err(DiffError::MalformedHunkHeader)` - A `@@` line that does not match
///   the hunk header grammar
pub fn parse_diff_hunks(diff: &str) -> Result<Vec<Hunk>, DiffError> {
    let mut hunks = Vec::new();
    let mut state = ScanState::AwaitingFileHeaders { old: None };

    for (index, line) in diff.lines().enumerate() {
        state = step(state, line, index + 1, &mut hunks)?;
    }

    if let ScanState::InHunkBody { hunk, .. } = state {
        hunks.push(hunk);
    }

    Ok(hunks)
}

fn step(
    state: ScanState,
    line: &str,
    line_number: usize,
    hunks: &mut Vec<Hunk>,
) -> Result<ScanState, DiffError> {
    match state {
        ScanState::InHunkBody {
            files,
            mut hunk,
            remaining_old,
            remaining_new,
        } => {
            if let Some(added) = body_content(line, '+', "+++ ", remaining_new) {
                hunk.additions.push(added.to_string());
                return Ok(ScanState::InHunkBody {
                    files,
                    hunk,
                    remaining_old,
                    remaining_new: remaining_new.saturating_sub(1),
                });
            }
            if let Some(removed) = body_content(line, '-', "--- ", remaining_old) {
                hunk.deletions.push(removed.to_string());
                return Ok(ScanState::InHunkBody {
                    files,
                    hunk,
                    remaining_old: remaining_old.saturating_sub(1),
                    remaining_new,
                });
            }

            // "\ No newline at end of file" can sit between deletions and
            // additions of the same hunk
            if line.starts_with('\\') {
                return Ok(ScanState::InHunkBody {
                    files,
                    hunk,
                    remaining_old,
                    remaining_new,
                });
            }

            // Anything else ends the hunk and is handled as a header line
            hunks.push(hunk);
            step_between_hunks(files, line, line_number)
        }
        ScanState::AwaitingHunkHeader { files } => step_between_hunks(files, line, line_number),
        ScanState::AwaitingFileHeaders { old } => Ok(step_file_headers(old, line, line_number)),
    }
}

/// Handle a line while no file pair is complete.
fn step_file_headers(old: Option<Option<String>>, line: &str, line_number: usize) -> ScanState {
    if line.starts_with("diff ") {
        return ScanState::AwaitingFileHeaders { old: None };
    }

    if let Some(rest) = line.strip_prefix("--- ") {
        return ScanState::AwaitingFileHeaders {
            old: Some(parse_file_marker(rest, "a/")),
        };
    }

    if let Some(rest) = line.strip_prefix("+++ ") {
        // No `---` marker means a single-file diff without an old side
        return ScanState::AwaitingHunkHeader {
            files: FilePair {
                old: old.flatten(),
                new: parse_file_marker(rest, "b/"),
            },
        };
    }

    if line.starts_with("@@") {
        tracing::debug!(line_number, "ignoring hunk header outside of a file section");
    }

    ScanState::AwaitingFileHeaders { old }
}

/// Handle a line after the file pair is known and no hunk is open.
fn step_between_hunks(
    files: FilePair,
    line: &str,
    line_number: usize,
) -> Result<ScanState, DiffError> {
    if line.starts_with("diff ") {
        return Ok(ScanState::AwaitingFileHeaders { old: None });
    }

    if let Some(rest) = line.strip_prefix("--- ") {
        return Ok(ScanState::AwaitingFileHeaders {
            old: Some(parse_file_marker(rest, "a/")),
        });
    }

    if let Some(rest) = line.strip_prefix("+++ ") {
        // A second `+++` without `---` starts another single-file section
        return Ok(ScanState::AwaitingHunkHeader {
            files: FilePair {
                old: None,
                new: parse_file_marker(rest, "b/"),
            },
        });
    }

    if line.starts_with("@@") {
        return open_hunk(files, line, line_number);
    }

    // "\ No newline at end of file", index lines, mode changes, ...
    Ok(ScanState::AwaitingHunkHeader { files })
}

fn open_hunk(files: FilePair, line: &str, line_number: usize) -> Result<ScanState, DiffError> {
    let header = parse_hunk_header(line).ok_or_else(|| DiffError::MalformedHunkHeader {
        line_number,
        line: line.to_string(),
    })?;

    let old_range = if files.old.is_some() { header.old } else { None };

    let hunk = Hunk {
        old_file: files.old.clone(),
        old_range,
        new_file: files.new.clone(),
        new_range: header.new,
        additions: Vec::new(),
        deletions: Vec::new(),
    };

    Ok(ScanState::InHunkBody {
        files,
        hunk,
        remaining_old: old_range.map_or(0, |range| range.len()),
        remaining_new: header.new.len(),
    })
}

/// Return the content of a body line starting with `marker`.
///
/// Once the header's count for this side is used up, a line that looks like
/// a file marker belongs to the next file rather than to the hunk.
fn body_content<'a>(
    line: &'a str,
    marker: char,
    file_marker: &str,
    remaining: usize,
) -> Option<&'a str> {
    if remaining == 0 && line.starts_with(file_marker) {
        return None;
    }
    line.strip_prefix(marker)
}
