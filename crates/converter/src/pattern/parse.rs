//! Parse — reads pattern-definition text into a list of [`PatternSpec`].
//!
//! Grammar, one pattern per physical line:
//!
//! ```text
//! # whole-line comment
//! NAME ::= REGEX
//! ```
//!
//! Blank lines are ignored. Malformed lines (no `::=`, or an empty name or
//! expression) are skipped, never fatal: they are reported back as
//! [`SkippedLine`] diagnostics alongside the parsed specs, and logged at
//! debug level.

use tracing::debug;

use super::normalize::strip_bom;
use super::spec::PatternSpec;

/// Parsed specs plus the diagnostics for every line that was dropped.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub specs: Vec<PatternSpec>,
    pub skipped: Vec<SkippedLine>,
}

/// A non-empty, non-comment definition line that did not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-indexed physical line number.
    pub line: usize,
    /// Trimmed line content, for diagnostics.
    pub content: String,
}

/// Parse pattern-definition text. Zero resulting specs is not an error by
/// itself; callers decide whether an empty batch is fatal.
pub fn parse_patterns(text: &str) -> ParseOutcome {
    let text = strip_bom(text);
    let mut outcome = ParseOutcome::default();

    for (i, raw_line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, expr)) = line.split_once("::=") else {
            debug!(line = line_no, content = line, "skipping malformed line");
            outcome.skipped.push(SkippedLine {
                line: line_no,
                content: line.to_string(),
            });
            continue;
        };
        let name = strip_bom(name.trim());
        let expr = strip_bom(expr.trim());
        if name.is_empty() || expr.is_empty() {
            debug!(line = line_no, content = line, "skipping line with empty name or expression");
            outcome.skipped.push(SkippedLine {
                line: line_no,
                content: line.to_string(),
            });
            continue;
        }
        outcome.specs.push(PatternSpec::new(name, expr));
    }

    outcome
}

/// Pick the spec a conversion run should use.
///
/// With a name, the first spec carrying that name wins (duplicates keep
/// parse order, so "first wins" resolves them). Without a name, the first
/// parsed spec wins.
pub fn select_pattern<'a>(specs: &'a [PatternSpec], name: Option<&str>) -> Option<&'a PatternSpec> {
    match name {
        Some(wanted) => specs.iter().find(|s| s.name == wanted),
        None => specs.first(),
    }
}
