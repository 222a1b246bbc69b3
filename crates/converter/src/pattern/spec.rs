//! Spec — the immutable unit of configuration for a conversion run.

use serde::Serialize;

use super::groups::extract_group_names;
use super::normalize::{normalize_pattern, strip_bom};

/// A parsed, normalized pattern plus its derived capture-group names.
///
/// `normalized` and `groups` are only written by the constructors, so
/// `groups` is always exactly the named captures syntactically present in
/// `normalized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    /// Identifier used for labeling output and log messages. Not required
    /// to be unique within a parse batch.
    pub name: String,
    /// Original expression text as written by the user, pre-normalization.
    pub raw: String,
    normalized: String,
    groups: Vec<String>,
}

/// JSON-friendly summary of a spec: the compilable expression and the field
/// names it extracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternDescriptor {
    pub pattern: String,
    pub fields: Vec<String>,
}

impl PatternSpec {
    /// Build a spec from a raw expression, running placeholder normalization.
    pub fn new(name: impl Into<String>, expr: &str) -> Self {
        let raw = strip_bom(expr.trim()).to_string();
        let normalized = normalize_pattern(&raw);
        let groups = extract_group_names(&normalized);
        Self {
            name: name.into(),
            raw,
            normalized,
            groups,
        }
    }

    /// Build a spec from an expression taken verbatim as the normalized
    /// form (no placeholder expansion). For callers that already hold a
    /// concrete regex; the text is not required to compile here — the file
    /// converter rejects it later if it does not.
    pub fn from_regex(name: impl Into<String>, pattern: &str) -> Self {
        let raw = pattern.to_string();
        let groups = extract_group_names(pattern);
        Self {
            name: name.into(),
            raw,
            normalized: pattern.to_string(),
            groups,
        }
    }

    /// The expression after placeholder substitution, ready to compile.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Named capture groups of `normalized`, in first-appearance order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Summarize the spec for serialization.
    pub fn descriptor(&self) -> PatternDescriptor {
        PatternDescriptor {
            pattern: self.normalized.clone(),
            fields: self.groups.clone(),
        }
    }
}
