//! Groups — syntactic scan for named capture groups in a regex string.
//!
//! This is a pure text scan for the named-group opening marker; it never
//! attempts to compile the input and never fails on malformed regex syntax.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches `(?P<name>` and the `(?<name>` spelling. The identifier rule
// (leading letter/underscore) keeps lookaround markers like `(?<=` out.
static GROUP_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\?P?<(?P<name>[A-Za-z_][A-Za-z0-9_]*)>").expect("group-name scanner is valid")
});

/// Return the named capture groups syntactically present in `pattern`,
/// ordered by first appearance, deduplicated at first occurrence.
pub fn extract_group_names(pattern: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in GROUP_NAME_RE.captures_iter(pattern) {
        let name = &caps["name"];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
