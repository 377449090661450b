//! Golden-report comparison for rendered cut-site summaries.

use std::path::Path;

/// Lines every summary report starts with, before the numbered pairs.
pub const HEADER_LINES: usize = 4;

/// One differing line between a golden report and a rendered one.
#[derive(Debug, PartialEq, Eq)]
pub struct LineDiff {
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Line-by-line differences; `\r\n` and `\n` endings compare equal.
pub fn summary_diff(expected: &str, actual: &str) -> Vec<LineDiff> {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();
    (0..expected.len().max(actual.len()))
        .filter_map(|idx| {
            let (e, a) = (expected.get(idx), actual.get(idx));
            (e != a).then(|| LineDiff {
                line: idx + 1,
                expected: e.map(|s| s.to_string()),
                actual: a.map(|s| s.to_string()),
            })
        })
        .collect()
}

/// Compare a rendered summary with `tests/golden/<name>`.
///
/// Fails when the header block is short or any line differs, listing each
/// differing line.
pub fn assert_summary_matches(name: &str, actual: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name);
    let expected = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read golden report {}: {err}", path.display()));

    assert!(
        actual.lines().count() >= HEADER_LINES,
        "summary is missing header lines:\n{actual}"
    );

    let diff = summary_diff(&expected, actual);
    if !diff.is_empty() {
        let listing: Vec<String> = diff
            .iter()
            .map(|d| format!("  line {}: expected {:?}, got {:?}", d.line, d.expected, d.actual))
            .collect();
        panic!(
            "summary differs from {}:\n{}",
            path.display(),
            listing.join("\n")
        );
    }
}
