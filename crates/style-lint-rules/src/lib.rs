//! # style-lint-rules
//!
//! Built-in lint rules for style-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SL001 | `indentation` | Checks that lines start at the expected indentation level |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//! use style_lint_java::JavaParser;
//! use style_lint_rules::IndentationCheck;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .parser(JavaParser::new())
//!     .rule(IndentationCheck::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod indentation;

pub use indentation::{IndentLevel, IndentOptions, IndentationCheck};

/// Re-export core types for convenience.
pub use style_lint_core::{Rule, Severity, Violation};

use style_lint_core::{Config, ConfigError, RuleBox};

/// Returns every built-in rule with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(IndentationCheck::new())]
}

/// Returns the built-in rules enabled in `config`, configured from it.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOption`] if a rule option is malformed.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let mut rules: Vec<RuleBox> = Vec::new();
    if config.is_rule_enabled(indentation::NAME) {
        rules.push(Box::new(IndentationCheck::from_config(config)?));
    }
    Ok(rules)
}
