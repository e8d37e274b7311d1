//! Violation specifiers reported by the analysis engine.
//!
//! A specifier identifies one detected issue:
//!
//! ```text
//! <ruleKey>:<relativeFilePath>:<startLine>:<startColumn>:<endLine>:<endColumn>
//! ```
//!
//! Line numbers are 1-based and inclusive on both ends. Specifiers are parsed
//! into [`ViolationSpec`] as soon as they enter the program.

use crate::range::LineRange;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A parsed violation specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViolationSpec {
    pub rule_key: u32,
    /// Path relative to the analyzed source directory.
    pub file_path: String,
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// Errors produced while parsing a violation specifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViolationSpecError {
    #[error("'{spec}' is missing the {field}")]
    MissingField { spec: String, field: &'static str },

    #[error("'{spec}': {field} must be an integer, found '{value}'")]
    InvalidInteger {
        spec: String,
        field: &'static str,
        value: String,
    },

    #[error("'{spec}': end line {end_line} is out of range")]
    LineOutOfRange { spec: String, end_line: usize },

    #[error("'{spec}': end line {end_line} is before start line {start_line}")]
    InvertedLines {
        spec: String,
        start_line: usize,
        end_line: usize,
    },
}

impl ViolationSpec {
    /// The half-open range of lines the violation covers.
    pub fn affected_lines(&self) -> LineRange {
        LineRange::from_inclusive(self.start_line, self.end_line)
    }
}

impl FromStr for ViolationSpec {
    type Err = ViolationSpecError;

    /// Parse a specifier string.
    ///
    /// The rule key is the first field and the four positions are the last
    /// four, so a file path that itself contains `:` is kept intact.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let missing = |field| ViolationSpecError::MissingField {
            spec: spec.to_string(),
            field,
        };

        let (rule_key, rest) = spec.split_once(':').ok_or_else(|| missing("file path"))?;

        let mut positions = rest.rsplitn(5, ':');
        let end_column = positions.next().ok_or_else(|| missing("end column"))?;
        let end_line = positions.next().ok_or_else(|| missing("end line"))?;
        let start_column = positions.next().ok_or_else(|| missing("start column"))?;
        let start_line = positions.next().ok_or_else(|| missing("start line"))?;
        let file_path = positions
            .next()
            .filter(|path| !path.is_empty())
            .ok_or_else(|| missing("file path"))?;

        let parsed = Self {
            rule_key: parse_field(spec, "rule key", rule_key)?,
            file_path: file_path.to_string(),
            start_line: parse_field(spec, "start line", start_line)?,
            start_column: parse_field(spec, "start column", start_column)?,
            end_line: parse_field(spec, "end line", end_line)?,
            end_column: parse_field(spec, "end column", end_column)?,
        };

        if parsed.end_line < parsed.start_line {
            return Err(ViolationSpecError::InvertedLines {
                spec: spec.to_string(),
                start_line: parsed.start_line,
                end_line: parsed.end_line,
            });
        }

        // The half-open span needs room for `end_line + 1`
        if parsed.end_line.checked_add(1).is_none() {
            return Err(ViolationSpecError::LineOutOfRange {
                spec: spec.to_string(),
                end_line: parsed.end_line,
            });
        }

        Ok(parsed)
    }
}

fn parse_field<T: FromStr>(
    spec: &str,
    field: &'static str,
    value: &str,
) -> Result<T, ViolationSpecError> {
    value.parse().map_err(|_| ViolationSpecError::InvalidInteger {
        spec: spec.to_string(),
        field,
        value: value.to_string(),
    })
}

impl fmt::Display for ViolationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.rule_key,
            self.file_path,
            self.start_line,
            self.start_column,
            self.end_line,
            self.end_column
        )
    }
}

// Serialized in the engine's own string form so output stays pasteable.
impl Serialize for ViolationSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse newline-separated specifiers, skipping blank lines.
pub fn parse_spec_list(input: &str) -> Result<Vec<ViolationSpec>, ViolationSpecError> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .collect()
}
