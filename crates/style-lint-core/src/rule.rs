//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::tree::SyntaxTree;
use crate::types::{Severity, Violation};

/// A per-file lint rule operating on a [`SyntaxTree`].
///
/// Rules receive the parsed tree read-only and return their findings.
/// They must not keep state between files.
///
/// # Example
///
/// ```ignore
/// use style_lint_core::{FileContext, Rule, SyntaxTree, Violation};
///
/// pub struct NoEmptyStatements;
///
/// impl Rule for NoEmptyStatements {
///     fn name(&self) -> &'static str { "no-empty-statements" }
///     fn code(&self) -> &'static str { "SL900" }
///
///     fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation> {
///         // walk tree.descendants(tree.root()) ...
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "indentation").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - The parsed syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, tree: &SyntaxTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
