//! Tests for ratchet filtering.

use super::{ChangedLineIndex, ExcludeGlobs, filter_by_ratchet, group_by_rule, is_ratcheted_in};
use crate::diff::Hunk;
use crate::range::LineRange;
use crate::violation::ViolationSpec;
use std::path::Path;

const ROOT: &str = "/some/bogus/worktree";

fn spec(raw: &str) -> ViolationSpec {
    raw.parse().unwrap()
}

fn hunk(file: &str, new_range: LineRange) -> Hunk {
    Hunk {
        old_file: Some(file.to_string()),
        old_range: None,
        new_file: Some(file.to_string()),
        new_range,
        additions: Vec::new(),
        deletions: Vec::new(),
    }
}

fn index_with(file: &str, ranges: &[LineRange]) -> ChangedLineIndex {
    let hunks: Vec<Hunk> = ranges.iter().map(|range| hunk(file, *range)).collect();
    ChangedLineIndex::from_hunks(&hunks, ROOT)
}

#[test]
fn test_index_from_diff_resolves_absolute_paths() {
    let diff = r#"diff --git a/src/range.rs b/src/range.rs
--- a/src/range.rs
+++ b/src/range.rs
@@ -164,0 +165,29 @@
+    #[test]
diff --git a/src/git.rs b/src/git.rs
--- a/src/git.rs
+++ b/src/git.rs
@@ -47,0 +48 @@
+    /// doc
@@ -50,2 +51,2 @@
-a
-b
+c
+d
"#;

    let index = ChangedLineIndex::from_diff(diff, ROOT).unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.ranges_for(&Path::new(ROOT).join("src/range.rs")),
        Some(&[LineRange::new(165, 194)][..])
    );
    assert_eq!(
        index.ranges_for(&Path::new(ROOT).join("src/git.rs")),
        Some(&[LineRange::new(48, 49), LineRange::new(51, 53)][..])
    );
    assert_eq!(index.ranges_for(Path::new("src/git.rs")), None);
}

#[test]
fn test_index_skips_empty_new_ranges_and_deleted_files() {
    let mut deleted = hunk("gone.rs", LineRange::empty_at(0));
    deleted.new_file = None;
    let hunks = vec![hunk("Main.java", LineRange::empty_at(4)), deleted];

    let index = ChangedLineIndex::from_hunks(&hunks, ROOT);

    assert!(index.is_empty());
    assert_eq!(index.files().count(), 0);
}

#[test]
fn test_index_keeps_duplicate_ranges() {
    let index = index_with("A.java", &[LineRange::new(3, 5), LineRange::new(3, 5)]);
    let ranges = index.ranges_for(&Path::new(ROOT).join("A.java")).unwrap();
    assert_eq!(ranges.len(), 2);
}

#[test]
fn test_index_from_malformed_diff_is_error() {
    let diff = "--- a/x\n+++ b/x\n@@ garbage @@\n";
    assert!(ChangedLineIndex::from_diff(diff, ROOT).is_err());
}

#[test]
fn test_violation_in_changed_range_is_retained() {
    let index = index_with("Main.java", &[LineRange::new(8, 12)]);
    assert!(is_ratcheted_in(&spec("1854:Main.java:10:4:10:7"), &index, ROOT));
}

#[test]
fn test_violation_in_untouched_file_is_dropped() {
    let index = index_with("Other.java", &[LineRange::new(8, 12)]);
    assert!(!is_ratcheted_in(&spec("1854:Main.java:10:4:10:7"), &index, ROOT));
}

#[test]
fn test_violation_outside_changed_ranges_is_dropped() {
    let index = index_with("Main.java", &[LineRange::new(1, 5)]);
    assert!(!is_ratcheted_in(&spec("1854:Main.java:10:4:10:7"), &index, ROOT));
}

#[test]
fn test_violation_touching_hunk_boundary() {
    // Changed lines 11..=14; the violation spans lines 8..=10
    let index = index_with("Main.java", &[LineRange::new(11, 15)]);
    assert!(!is_ratcheted_in(&spec("1854:Main.java:8:1:10:2"), &index, ROOT));
    assert!(is_ratcheted_in(&spec("1854:Main.java:8:1:11:2"), &index, ROOT));
}

#[test]
fn test_violation_path_resolved_against_source_root() {
    let hunks = vec![hunk("module/src/Main.java", LineRange::new(10, 11))];
    let index = ChangedLineIndex::from_hunks(&hunks, ROOT);
    let source_root = Path::new(ROOT).join("module");

    assert!(is_ratcheted_in(&spec("1854:src/Main.java:10:4:10:7"), &index, &source_root));
    assert!(!is_ratcheted_in(&spec("1854:src/Main.java:10:4:10:7"), &index, ROOT));
}

#[test]
fn test_group_by_rule_preserves_order() {
    let grouped = group_by_rule(vec![
        spec("2184:B.java:3:29:3:30"),
        spec("1854:A.java:5:10:5:13"),
        spec("2184:A.java:9:1:9:4"),
    ]);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&1854].len(), 1);
    assert_eq!(grouped[&2184][0].file_path, "B.java");
    assert_eq!(grouped[&2184][1].file_path, "A.java");
}

#[test]
fn test_filter_by_ratchet_drops_emptied_rules() {
    let index = index_with("A.java", &[LineRange::new(5, 6)]);
    let grouped = group_by_rule(vec![
        spec("1854:A.java:5:10:5:13"),
        spec("1854:A.java:40:1:40:2"),
        spec("2184:B.java:3:29:3:30"),
    ]);

    let retained = filter_by_ratchet(grouped, &index, ROOT, &ExcludeGlobs::none());

    assert_eq!(retained.len(), 1);
    assert_eq!(retained[&1854], vec![spec("1854:A.java:5:10:5:13")]);
    assert!(!retained.contains_key(&2184));
}

#[test]
fn test_filter_by_ratchet_applies_excludes() {
    let hunks = vec![
        hunk("src/A.java", LineRange::new(1, 100)),
        hunk("generated/B.java", LineRange::new(1, 100)),
    ];
    let index = ChangedLineIndex::from_hunks(&hunks, ROOT);
    let excludes = ExcludeGlobs::new(&["generated/**".to_string()]).unwrap();
    let grouped = group_by_rule(vec![
        spec("1854:src/A.java:5:10:5:13"),
        spec("1854:generated/B.java:5:10:5:13"),
    ]);

    let retained = filter_by_ratchet(grouped, &index, ROOT, &excludes);

    assert_eq!(retained[&1854], vec![spec("1854:src/A.java:5:10:5:13")]);
}

#[test]
fn test_invalid_exclude_glob_is_user_error() {
    let err = ExcludeGlobs::new(&["src/[".to_string()]).unwrap_err();
    assert!(err.to_string().contains("exclude_globs"));
}
