//! Indentation findings and the per-file sink that collects them.

use std::collections::BTreeSet;

use super::level::IndentLevel;

/// Whether a finding concerns a construct or a child of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A construct's own token (keyword, brace, continuation line).
    Construct,
    /// A statement or member reported on behalf of its enclosing construct.
    Child,
}

/// One mis-indented token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentViolation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Actual column (0-indexed, tabs expanded).
    pub column: usize,
    /// Name of the offending part, e.g. `if rcurly`.
    pub label: String,
    /// What would have been accepted.
    pub expected: IndentLevel,
    /// Message form.
    pub kind: ViolationKind,
}

impl IndentViolation {
    /// Renders the diagnostic message.
    #[must_use]
    pub fn message(&self) -> String {
        let child = match self.kind {
            ViolationKind::Construct => "",
            ViolationKind::Child => " child",
        };
        let expected = if self.expected.is_multi() {
            format!("one of the following: {}", self.expected)
        } else {
            self.expected.to_string()
        };
        format!(
            "'{}'{child} has incorrect indentation level {}, expected level should be {expected}.",
            self.label, self.column
        )
    }
}

/// Ordered, line-deduplicated sink of findings for one file.
///
/// Once a line has been reported, later findings on the same line are
/// dropped.
#[derive(Debug, Default)]
pub struct ViolationLog {
    violations: Vec<IndentViolation>,
    lines: BTreeSet<usize>,
}

impl ViolationLog {
    /// Records a finding unless its line is already reported.
    pub fn record(&mut self, violation: IndentViolation) {
        if self.lines.insert(violation.line) {
            self.violations.push(violation);
        }
    }

    /// Number of recorded findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Consumes the log, returning findings in recording order.
    #[must_use]
    pub fn into_violations(self) -> Vec<IndentViolation> {
        self.violations
    }
}

impl Extend<IndentViolation> for ViolationLog {
    fn extend<T: IntoIterator<Item = IndentViolation>>(&mut self, iter: T) {
        for violation in iter {
            self.record(violation);
        }
    }
}
