// Module structure for the log-pattern conversion engine.

// Core engine
pub mod pattern;
pub mod convert;

// Infrastructure
pub mod conf;
pub mod error;

// Re-export commonly used types
pub use conf::ConverterConfig;
pub use convert::{convert_file, convert_line, ConversionResult, Extraction, SAMPLE_CAP};
pub use error::ConvertError;
pub use pattern::{
    extract_group_names, normalize_pattern, parse_patterns, select_pattern, validate_pattern,
    ParseOutcome, PatternDescriptor, PatternSpec, SkippedLine,
};
