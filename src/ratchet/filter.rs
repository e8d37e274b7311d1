//! Ratchet decisions for individual violations and grouped rule sets.

use super::index::ChangedLineIndex;
use crate::error::{RatchetError, Result};
use crate::violation::ViolationSpec;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;
use std::path::Path;

/// Decide whether a violation lies inside changed code.
///
/// `source_root` is the directory the violation's path is relative to.
/// A file the diff did not touch is simply not ratcheted in.
pub fn is_ratcheted_in<P: AsRef<Path>>(
    spec: &ViolationSpec,
    index: &ChangedLineIndex,
    source_root: P,
) -> bool {
    let path = source_root.as_ref().join(&spec.file_path);
    index
        .ranges_for(&path)
        .is_some_and(|changed| spec.affected_lines().overlaps_any(changed))
}

/// Group specifiers by rule key, keeping input order within each rule.
pub fn group_by_rule(specs: Vec<ViolationSpec>) -> BTreeMap<u32, Vec<ViolationSpec>> {
    let mut grouped: BTreeMap<u32, Vec<ViolationSpec>> = BTreeMap::new();
    for spec in specs {
        grouped.entry(spec.rule_key).or_default().push(spec);
    }
    grouped
}

/// Compiled glob patterns for paths that are never ratcheted in.
#[derive(Debug, Clone)]
pub struct ExcludeGlobs {
    set: GlobSet,
}

impl ExcludeGlobs {
    /// Compile exclude patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(ExcludeGlobs)` - Successfully compiled patterns
    /// * `Err(RatchetError::UserError)` - If any pattern is not a valid glob
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                RatchetError::UserError(format!(
                    "invalid glob pattern in exclude_globs: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let set = builder.build().map_err(|e| {
            RatchetError::UserError(format!("failed to build exclude_globs: {}", e))
        })?;

        Ok(Self { set })
    }

    /// Patterns that match nothing.
    pub fn none() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    /// Returns true if the relative path matches any pattern.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.set.is_match(relative_path)
    }
}

/// Keep only ratcheted-in violations, dropping rules left without any.
pub fn filter_by_ratchet<P: AsRef<Path>>(
    grouped: BTreeMap<u32, Vec<ViolationSpec>>,
    index: &ChangedLineIndex,
    source_root: P,
    excludes: &ExcludeGlobs,
) -> BTreeMap<u32, Vec<ViolationSpec>> {
    let source_root = source_root.as_ref();
    let mut retained = BTreeMap::new();

    for (rule_key, specs) in grouped {
        let before = specs.len();
        let kept: Vec<ViolationSpec> = specs
            .into_iter()
            .filter(|spec| !excludes.is_excluded(&spec.file_path))
            .filter(|spec| is_ratcheted_in(spec, index, source_root))
            .collect();

        tracing::debug!(rule_key, before, after = kept.len(), "ratcheted rule");

        if !kept.is_empty() {
            retained.insert(rule_key, kept);
        }
    }

    retained
}
