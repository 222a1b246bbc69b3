//! Model — ConversionResult and related types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of successful extractions retained in a result. Samples
/// are the first matches in file order, not a random sample.
pub const SAMPLE_CAP: usize = 20;

/// One extracted record: declared group name → matched substring (empty
/// string when the group did not participate in the match).
pub type Extraction = BTreeMap<String, String>;

/// Summary of one file conversion. Created fresh per run; a terminal value
/// with no further lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Name of the pattern spec that was applied.
    pub pattern_name: String,
    /// Non-blank lines considered.
    pub processed: u64,
    /// Lines among `processed` where the pattern matched. Always <= processed.
    pub matched: u64,
    /// First `min(matched, SAMPLE_CAP)` extractions in file order.
    pub samples: Vec<Extraction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut extraction = Extraction::new();
        extraction.insert("ip".to_string(), "127.0.0.1".to_string());
        extraction.insert("req".to_string(), "GET /índice HTTP/1.1".to_string());

        let result = ConversionResult {
            pattern_name: "ACCESS".to_string(),
            processed: 2,
            matched: 1,
            samples: vec![extraction],
        };

        let json = serde_json::to_string_pretty(&result).unwrap();
        let parsed: ConversionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_json_preserves_non_ascii() {
        let mut extraction = Extraction::new();
        extraction.insert("word".to_string(), "über".to_string());
        let result = ConversionResult {
            pattern_name: "UNICODE".to_string(),
            processed: 1,
            matched: 1,
            samples: vec![extraction],
        };

        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("über"));
        assert!(!json.contains("\\u"));
    }
}
