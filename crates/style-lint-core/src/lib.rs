//! # style-lint-core
//!
//! Core framework for style linting over a language-agnostic syntax tree.
//!
//! This crate provides the foundational traits and types for building
//! style checks. It includes:
//!
//! - [`SyntaxTree`] and [`TreeBuilder`], the read-only tree rules consume
//! - [`SourceParser`] trait for pluggable language front-ends
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .parser(JavaParser::new(8))
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod parser;
mod rule;
mod types;

/// Syntax tree model shared by parsers and rules.
pub mod tree;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use parser::{ParseError, ParserBox, SourceParser};
pub use rule::{Rule, RuleBox};
pub use tree::{Node, NodeId, NodeKind, SyntaxTree, TreeBuilder, TreeError};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
