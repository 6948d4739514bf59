//! Configuration file loading.
//!
//! The comparison tolerance is fixed and cannot be configured; only the
//! empirical linguistic range and text-analysis options are exposed.

use crate::validation::LinguisticRange;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Lower bound of the natural-language entropy range, in bits.
    pub linguistic_min_bits: f64,
    /// Upper bound of the natural-language entropy range, in bits.
    pub linguistic_max_bits: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let range = LinguisticRange::default();
        Self {
            linguistic_min_bits: range.min_bits,
            linguistic_max_bits: range.max_bits,
        }
    }
}

impl ValidationConfig {
    /// Validates the configured range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.linguistic_min_bits, self.linguistic_max_bits);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ConfigError::InvalidLinguisticRange { min, max });
        }
        Ok(())
    }

    pub fn linguistic_range(&self) -> LinguisticRange {
        LinguisticRange {
            min_bits: self.linguistic_min_bits,
            max_bits: self.linguistic_max_bits,
        }
    }
}

/// Text analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Treat input text as natural language (enables the linguistic check).
    pub natural_language: bool,
    /// Fold words to lowercase before counting.
    pub lowercase: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            natural_language: true,
            lowercase: true,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid linguistic range {min}-{max} (bounds must be finite, non-negative and ordered)")]
    InvalidLinguisticRange { min: f64, max: f64 },
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validation.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_valid() {
        let config = FileConfig::default();
        assert!(config.validation.validate().is_ok());
        assert_eq!(config.validation.linguistic_range(), LinguisticRange::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = FileConfig::from_toml("").unwrap();
        assert_eq!(config.validation.linguistic_min_bits, 6.0);
        assert_eq!(config.validation.linguistic_max_bits, 12.0);
        assert!(config.analysis.natural_language);
    }

    #[test]
    fn test_partial_section() {
        let config = FileConfig::from_toml("[validation]\nlinguistic_max_bits = 10.0\n").unwrap();
        assert_eq!(config.validation.linguistic_min_bits, 6.0);
        assert_eq!(config.validation.linguistic_max_bits, 10.0);
    }

    #[test]
    fn test_inverted_range_invalid() {
        let result = FileConfig::from_toml(
            "[validation]\nlinguistic_min_bits = 9.0\nlinguistic_max_bits = 3.0\n",
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLinguisticRange { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            FileConfig::from_toml("[validation"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[analysis]\nnatural_language = false\nlowercase = false").unwrap();

        let config = FileConfig::from_file(file.path()).unwrap();
        assert!(!config.analysis.natural_language);
        assert!(!config.analysis.lowercase);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FileConfig::from_file("/nonexistent/word-entropy.toml"),
            Err(ConfigError::FileReadError(_))
        ));
    }
}
