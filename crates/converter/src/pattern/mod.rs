//! Pattern module — definition parsing, placeholder normalization, named-group
//! extraction, and compile validation.
//!
//! A pattern definition file holds one pattern per line (`NAME ::= REGEX`,
//! `#` comments, blank lines ignored). Each surviving line becomes an
//! immutable [`PatternSpec`] whose `groups` are derived from its normalized
//! expression and never set independently.

pub mod groups;
pub mod normalize;
pub mod parse;
pub mod spec;
pub mod validate;

pub use groups::extract_group_names;
pub use normalize::normalize_pattern;
pub use parse::{parse_patterns, select_pattern, ParseOutcome, SkippedLine};
pub use spec::{PatternDescriptor, PatternSpec};
pub use validate::validate_pattern;
