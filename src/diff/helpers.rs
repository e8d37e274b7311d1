//! Helper functions for diff parsing.

use crate::range::LineRange;
use regex::Regex;
use std::sync::LazyLock;

/// Hunk header grammar. The old side is optional for single-file diffs.
static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ (?:-(\d+)(?:,(\d+))? )?\+(\d+)(?:,(\d+))? @@")
        .expect("hardcoded hunk header regex")
});

/// Line ranges declared by a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// Old-side range. `None` when the header omits the old side or declares
    /// `-0,0` (nothing existed before).
    pub old: Option<LineRange>,
    /// New-side range.
    pub new: LineRange,
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@ optional context"
///
/// For each side an omitted length means one line and a length of zero
/// means an empty range anchored at the start line.
///
/// Returns `None` if the line does not match the grammar or a line number
/// is too large to be followed by another line.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_RE.captures(line)?;

    let old = match caps.get(1) {
        Some(start) => {
            let start = parse_number(start.as_str())?;
            let count = match caps.get(2) {
                Some(c) => Some(parse_number(c.as_str())?),
                None => None,
            };
            if start == 0 && count == Some(0) {
                None
            } else {
                Some(side_range(start, count)?)
            }
        }
        None => None,
    };

    let new_start = parse_number(caps.get(3)?.as_str())?;
    let new_count = match caps.get(4) {
        Some(c) => Some(parse_number(c.as_str())?),
        None => None,
    };
    let new = side_range(new_start, new_count)?;

    Some(HunkHeader { old, new })
}

fn side_range(start: usize, count: Option<usize>) -> Option<LineRange> {
    let count = count.unwrap_or(1);
    // An empty side still anchors a one-line span at `start`
    start.checked_add(count.max(1))?;
    Some(LineRange::new(start, start + count))
}

fn parse_number(digits: &str) -> Option<usize> {
    digits.parse().ok()
}

/// Parse the path of a `---` or `+++` file marker.
///
/// `rest` is the text after the marker, `prefix` the mnemonic prefix git
/// puts on that side ("a/" or "b/"). Returns `None` for `/dev/null`.
pub(super) fn parse_file_marker(rest: &str, prefix: &str) -> Option<String> {
    // GNU diff appends a tab and a timestamp
    let path = rest.split_once('\t').map_or(rest, |(path, _)| path);
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);

    if path == "/dev/null" {
        return None;
    }

    let path = path.strip_prefix(prefix).unwrap_or(path);
    Some(normalize_path(path))
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
