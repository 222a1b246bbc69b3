//! Load — config loading from file and environment variables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::ConverterConfig;

impl ConverterConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("LOGCONV_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/logconv/converter.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(patterns) = std::env::var("LOGCONV_PATTERNS") {
            config.patterns_file = patterns;
        }
        if let Ok(name) = std::env::var("LOGCONV_PATTERN") {
            config.pattern_name = Some(name);
        }
        if let Ok(out) = std::env::var("LOGCONV_OUT") {
            config.output_path = Some(out);
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: ConverterConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        Self {
            patterns_file: std::env::var("LOGCONV_PATTERNS")
                .unwrap_or_else(|_| "patterns.txt".to_string()),
            pattern_name: std::env::var("LOGCONV_PATTERN").ok(),
            output_path: std::env::var("LOGCONV_OUT").ok(),
        }
    }
}
