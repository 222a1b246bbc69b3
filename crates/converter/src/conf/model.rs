//! Model — ConverterConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Path to the pattern-definition file (`NAME ::= REGEX` per line).
    pub patterns_file: String,
    /// Pattern to apply; `None` selects the first parsed spec.
    pub pattern_name: Option<String>,
    /// Destination for the JSON result; `None` skips persistence.
    pub output_path: Option<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            patterns_file: "patterns.txt".to_string(),
            pattern_name: None,
            output_path: None,
        }
    }
}

impl ConverterConfig {
    /// Validate that configuration values are sane.
    pub fn validate(&self) -> Result<(), String> {
        if self.patterns_file.is_empty() {
            return Err("patterns_file must not be empty".to_string());
        }
        if let Some(name) = &self.pattern_name {
            if name.trim().is_empty() {
                return Err("pattern_name must not be blank when set".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ConverterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_patterns_file_is_rejected() {
        let config = ConverterConfig {
            patterns_file: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_pattern_name_is_rejected() {
        let config = ConverterConfig {
            pattern_name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
