//! Configuration types for style-lint.

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for style-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing run (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration table of a rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Severity at or above which a run fails.
    #[must_use]
    pub fn fail_threshold(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/build/**".to_string()],
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the value is not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.options.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| ConfigError::invalid(key, value, "expected a boolean")),
        }
    }

    /// Gets a non-negative integer option with a default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the value is not an
    /// integer or is negative.
    pub fn get_usize(&self, key: &str, default: usize) -> Result<usize, ConfigError> {
        let Some(value) = self.options.get(key) else {
            return Ok(default);
        };
        let int = value
            .as_integer()
            .ok_or_else(|| ConfigError::invalid(key, value, "expected an integer"))?;
        usize::try_from(int).map_err(|_| ConfigError::invalid(key, value, "must not be negative"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// An option value is outside its valid domain.
    #[error("Invalid value {value} for option `{key}`: {reason}")]
    InvalidOption {
        /// Option name.
        key: String,
        /// Offending value as written.
        value: String,
        /// What was expected instead.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an [`ConfigError::InvalidOption`].
    #[must_use]
    pub fn invalid(key: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_threshold(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
root = "./src"
exclude = ["**/generated/**"]

[rules.indentation]
enabled = true
severity = "warning"
basic_offset = 2
force_strict_condition = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.fail_threshold(), Severity::Warning);
        assert!(config.is_rule_enabled("indentation"));
        assert_eq!(config.rule_severity("indentation"), Some(Severity::Warning));

        let rule_config = config.rule_config("indentation").unwrap();
        assert_eq!(rule_config.get_usize("basic_offset", 4).unwrap(), 2);
        assert_eq!(rule_config.get_usize("case_indent", 4).unwrap(), 4);
        assert!(rule_config.get_bool("force_strict_condition", false).unwrap());
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config::parse("[rules.indentation]\nenabled = false\n").unwrap();
        assert!(!config.is_rule_enabled("indentation"));
        assert!(config.is_rule_enabled("other"));
    }

    #[test]
    fn test_negative_option_rejected() {
        let config = Config::parse("[rules.indentation]\nbasic_offset = -2\n").unwrap();
        let err = config
            .rule_config("indentation")
            .unwrap()
            .get_usize("basic_offset", 4)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { ref key, .. } if key == "basic_offset"));
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let config = Config::parse("[rules.indentation]\nforce_strict_condition = 1\n").unwrap();
        let rule = config.rule_config("indentation").unwrap();
        assert!(rule.get_bool("force_strict_condition", false).is_err());
        assert!(Config::parse("[analyzer\n").is_err());
    }
}
