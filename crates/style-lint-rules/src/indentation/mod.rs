//! Indentation rule.
//!
//! Verifies that every line of a Java source file starts at a column
//! derived from the nesting of the constructs around it.
//!
//! # Levels
//!
//! Each construct gets an [`IndentLevel`] from its enclosing construct: the
//! body of a block is one [`basic_offset`](IndentOptions::basic_offset)
//! further right, `case` labels sit [`case_indent`](IndentOptions::case_indent)
//! right of their `switch`, and so on. Continuation lines of a wrapped
//! statement must be at least
//! [`line_wrapping_indentation`](IndentOptions::line_wrapping_indentation)
//! right of the line they continue.
//!
//! # Configuration
//!
//! ```toml
//! [rules.indentation]
//! basic_offset = 4
//! brace_adjustment = 0
//! case_indent = 4
//! array_init_indent = 4
//! line_wrapping_indentation = 4
//! throws_indent = 4
//! force_strict_condition = false
//! tab_width = 8
//! ```

mod factory;
mod handlers;
mod level;
mod options;
mod violation;
mod walker;

pub use level::{Columns, IndentLevel};
pub use options::IndentOptions;
pub use violation::{IndentViolation, ViolationKind, ViolationLog};
pub use walker::check_tree;

use style_lint_core::{
    Config, ConfigError, FileContext, Location, Rule, Severity, Suggestion, SyntaxTree, Violation,
};

/// Rule code for indentation.
pub const CODE: &str = "SL001";

/// Rule name for indentation.
pub const NAME: &str = "indentation";

/// Checks the indentation of every line.
#[derive(Debug, Clone, Default)]
pub struct IndentationCheck {
    /// Offsets and modes.
    pub options: IndentOptions,
    /// Severity override.
    pub severity: Option<Severity>,
}

impl IndentationCheck {
    /// Creates the rule with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the rule from the `[rules.indentation]` table of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if an option is malformed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let options = match config.rule_config(NAME) {
            Some(table) => IndentOptions::from_rule_config(table)?,
            None => IndentOptions::default(),
        };
        Ok(Self {
            options,
            severity: config.rule_severity(NAME),
        })
    }

    /// Sets the options.
    #[must_use]
    pub fn options(mut self, options: IndentOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    fn to_violation(&self, ctx: &FileContext, finding: &IndentViolation) -> Violation {
        let (offset, length) = ctx.line_content_span(finding.line);
        let location = Location::new(ctx.relative_path.clone(), finding.line, finding.column + 1)
            .with_span(offset, length);
        let violation = Violation::new(
            CODE,
            NAME,
            self.default_severity(),
            location,
            finding.message(),
        );
        if finding.expected.is_multi() {
            violation
        } else {
            violation.with_suggestion(Suggestion::new(format!(
                "indent to column {}",
                finding.expected.first()
            )))
        }
    }
}

impl Rule for IndentationCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks that lines start at the expected indentation level"
    }

    fn default_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Error)
    }

    fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation> {
        check_tree(tree, &self.options)
            .iter()
            .map(|finding| self.to_violation(ctx, finding))
            .collect()
    }
}
