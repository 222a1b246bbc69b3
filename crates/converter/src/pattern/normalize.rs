//! Normalize — rewrites a raw pattern string into a compilable regex.
//!
//! Placeholder expansion is a literal substring replacement, not regex-aware:
//! a token appearing inside a character class or an unrelated literal is
//! still replaced. That is the documented contract, kept deliberately simple.

/// Byte-order mark that sometimes leaks into pattern files saved on Windows.
pub(crate) const BOM: char = '\u{feff}';

/// Fixed placeholder table, applied in order. Each expansion introduces a
/// named capture group other patterns may rely on.
const PLACEHOLDERS: &[(&str, &str)] = &[
    (
        "%TIMESTAMP%",
        r"(?P<timestamp>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z?)",
    ),
    ("%INT%", r"(?P<int>\d+)"),
    ("%WORD%", r"(?P<word>\w+)"),
    ("%GREEDY%", r"(?P<g>.*)"),
];

/// Normalize a raw pattern expression:
/// 1. Trim leading/trailing whitespace.
/// 2. Strip an accidental leading BOM.
/// 3. Expand every placeholder token via literal substring replacement.
///
/// Pure function; a pattern containing no placeholder tokens comes back
/// unchanged apart from trimming.
pub fn normalize_pattern(expr: &str) -> String {
    let mut s = strip_bom(expr.trim()).to_string();
    for (token, expansion) in PLACEHOLDERS {
        if s.contains(token) {
            s = s.replace(token, expansion);
        }
    }
    s
}

/// Strip any leading byte-order marks from a string slice.
pub(crate) fn strip_bom(s: &str) -> &str {
    s.trim_start_matches(BOM)
}
