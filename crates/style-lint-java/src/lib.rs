//! # style-lint-java
//!
//! Tree-sitter based Java front-end for style-lint.
//!
//! [`JavaParser`] implements [`SourceParser`](style_lint_core::SourceParser)
//! and turns `.java` files into the language-agnostic
//! [`SyntaxTree`](style_lint_core::SyntaxTree) consumed by the rules.
//! Columns in the produced tree are display columns with tabs expanded
//! to the configured tab width.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod convert;
mod parser;

pub use parser::{JavaParser, DEFAULT_TAB_WIDTH};
