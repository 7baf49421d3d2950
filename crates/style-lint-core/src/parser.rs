//! Source parser extension point.
//!
//! `SourceParser` is how a language front-end plugs into the [`Analyzer`].
//! Implementations turn raw source text into the language-agnostic
//! [`SyntaxTree`] that rules consume.
//!
//! [`Analyzer`]: crate::Analyzer

use crate::tree::SyntaxTree;
use thiserror::Error;

/// Failure to produce a syntax tree for a source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {line})")]
pub struct ParseError {
    /// First line (1-indexed) where the parser gave up.
    pub line: usize,
    /// Parser message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Trait for language-specific parsing.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"java"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&["java"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text into a syntax tree.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the source is not well formed.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError>;
}

/// Type alias for boxed `SourceParser` trait objects.
pub type ParserBox = Box<dyn SourceParser>;
