//! Line — applies one compiled pattern to one line of text.

use regex::Regex;

use super::model::Extraction;

/// Search `line` for `compiled` (unanchored) and extract the requested
/// fields.
///
/// Returns `None` when the pattern does not match — a normal outcome, not an
/// error. On a match the output has exactly one entry per requested field:
/// the captured substring, or an empty string when that group did not
/// participate in this match (or is not present in the pattern at all).
pub fn convert_line(line: &str, compiled: &Regex, fields: &[String]) -> Option<Extraction> {
    let caps = compiled.captures(line)?;
    let mut out = Extraction::new();
    for field in fields {
        let value = caps.name(field).map(|m| m.as_str()).unwrap_or("");
        out.insert(field.clone(), value.to_string());
    }
    Some(out)
}
