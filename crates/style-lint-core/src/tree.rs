//! Read-only syntax tree consumed by rules.
//!
//! Language front-ends produce a [`SyntaxTree`] through a [`TreeBuilder`].
//! Nodes live in a flat arena and are addressed by [`NodeId`]; parent
//! and child links are plain indices into that arena.
//!
//! Positions follow the conventions of the checks that consume the tree:
//! lines are 1-based, columns are 0-based with tabs already expanded.
//! Construct nodes sit on their first token and brace containers
//! ([`NodeKind::Block`], [`NodeKind::ObjBlock`], [`NodeKind::ArrayInit`])
//! sit on their `{`.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Index of a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind tag of a syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a source file.
    CompilationUnit,
    /// `package a.b;`
    PackageDef,
    /// `import a.b.C;`
    Import,
    /// `class Foo`
    ClassDef,
    /// `interface Foo`
    InterfaceDef,
    /// `enum Foo`
    EnumDef,
    /// `record Foo(...)`
    RecordDef,
    /// `@interface Foo`
    AnnotationDef,
    /// Brace-delimited body of a type definition or anonymous class.
    ObjBlock,
    /// A constant inside an enum body.
    EnumConstant,
    /// Method definition.
    MethodDef,
    /// Constructor definition.
    CtorDef,
    /// `static { ... }`
    StaticInit,
    /// Modifier list, including annotations.
    Modifiers,
    /// A single annotation.
    Annotation,
    /// Formal parameter list.
    Parameters,
    /// `throws A, B`
    Throws,
    /// Field or local variable declaration.
    VariableDef,
    /// `{ ... }` statement block.
    Block,
    /// `if`
    If,
    /// `else` together with its body.
    Else,
    /// `for`, including the enhanced form.
    For,
    /// `while`
    While,
    /// `do`
    Do,
    /// Trailing `while (...)` of a do-while loop.
    DoWhile,
    /// `try`
    Try,
    /// `catch`
    Catch,
    /// `finally`
    Finally,
    /// `synchronized`
    Synchronized,
    /// `switch`, statement or expression.
    Switch,
    /// Labels of one switch entry together with the statements they guard.
    CaseGroup,
    /// `case X:` or `case X ->`
    Case,
    /// `default:` or `default ->`
    Default,
    /// Expression statement.
    ExprStmt,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `throw`
    Throw,
    /// `yield`
    Yield,
    /// `assert`
    Assert,
    /// `label: statement`
    Labeled,
    /// Lone `;` statement.
    Empty,
    /// Any expression without a more specific kind.
    Expr,
    /// Identifier or type name.
    Ident,
    /// Literal value.
    Literal,
    /// Method invocation.
    Call,
    /// Member access; the node sits on its `.` token.
    Dot,
    /// Object creation.
    New,
    /// `{ a, b }` array initializer.
    ArrayInit,
    /// Lambda expression.
    Lambda,
    /// Call argument list.
    Arguments,
    /// Keyword token.
    Keyword,
    /// Operator token.
    Operator,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `->`
    Arrow,
}

impl NodeKind {
    /// Returns the human readable name used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CompilationUnit => "compilation unit",
            Self::PackageDef => "package def",
            Self::Import => "import",
            Self::ClassDef => "class def",
            Self::InterfaceDef => "interface def",
            Self::EnumDef => "enum def",
            Self::RecordDef => "record def",
            Self::AnnotationDef => "annotation def",
            Self::ObjBlock => "object def",
            Self::EnumConstant => "enum constant",
            Self::MethodDef => "method def",
            Self::CtorDef => "ctor def",
            Self::StaticInit => "static initialization",
            Self::Modifiers => "modifier",
            Self::Annotation => "annotation",
            Self::Parameters => "parameters",
            Self::Throws => "throws",
            Self::VariableDef => "member def",
            Self::Block => "block",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While | Self::DoWhile => "while",
            Self::Do => "do..while",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::Synchronized => "synchronized",
            Self::Switch => "switch",
            Self::CaseGroup | Self::Case => "case",
            Self::Default => "default",
            Self::ExprStmt => "expression",
            Self::Return => "return",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Throw => "throw",
            Self::Yield => "yield",
            Self::Assert => "assert",
            Self::Labeled => "label",
            Self::Empty => "empty statement",
            Self::Expr => "expression",
            Self::Ident => "identifier",
            Self::Literal => "literal",
            Self::Call => "method call",
            Self::Dot => "member access",
            Self::New => "new",
            Self::ArrayInit => "array initialization",
            Self::Lambda => "lambda",
            Self::Arguments => "arguments",
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
            Self::LCurly => "lcurly",
            Self::RCurly => "rcurly",
            Self::Semi => "semi",
            Self::Comma => "comma",
            Self::Colon => "colon",
            Self::Arrow => "arrow",
        }
    }

    /// Returns `true` for punctuation, keyword and operator tokens.
    #[must_use]
    pub fn is_token(self) -> bool {
        matches!(
            self,
            Self::Keyword
                | Self::Operator
                | Self::LParen
                | Self::RParen
                | Self::LCurly
                | Self::RCurly
                | Self::Semi
                | Self::Comma
                | Self::Colon
                | Self::Arrow
        )
    }

    /// Returns `true` for type definitions.
    #[must_use]
    pub fn is_type_def(self) -> bool {
        matches!(
            self,
            Self::ClassDef
                | Self::InterfaceDef
                | Self::EnumDef
                | Self::RecordDef
                | Self::AnnotationDef
        )
    }

    /// Returns `true` for kinds that may stand in statement position.
    #[must_use]
    pub fn is_statement(self) -> bool {
        self.is_type_def()
            || matches!(
                self,
                Self::Block
                    | Self::If
                    | Self::For
                    | Self::While
                    | Self::Do
                    | Self::Try
                    | Self::Switch
                    | Self::Synchronized
                    | Self::ExprStmt
                    | Self::VariableDef
                    | Self::Return
                    | Self::Break
                    | Self::Continue
                    | Self::Throw
                    | Self::Yield
                    | Self::Assert
                    | Self::Labeled
                    | Self::Empty
            )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single node of a [`SyntaxTree`].
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    line: usize,
    column: usize,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// Kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Line number (1-indexed).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column (0-indexed, tabs expanded).
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Raw token text, or a short description for composite nodes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in source order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Immutable syntax tree of one source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    line_starts: BTreeMap<usize, usize>,
}

impl SyntaxTree {
    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A built tree always holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node behind `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Shorthand for `self.node(id).kind()`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    /// Shorthand for `self.node(id).line()`.
    #[must_use]
    pub fn line(&self, id: NodeId) -> usize {
        self.node(id).line
    }

    /// Shorthand for `self.node(id).column()`.
    #[must_use]
    pub fn column(&self, id: NodeId) -> usize {
        self.node(id).column
    }

    /// Shorthand for `self.node(id).text()`.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    /// Shorthand for `self.node(id).parent()`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Shorthand for `self.node(id).children()`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Returns the first direct child of the given kind.
    #[must_use]
    pub fn find_child(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.kind(c) == kind)
    }

    /// Returns the last direct child.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Column of the leftmost node on `line`, if the line holds any node.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(&line).copied()
    }

    /// Returns `true` if nothing precedes the node on its line.
    #[must_use]
    pub fn starts_line(&self, id: NodeId) -> bool {
        let node = self.node(id);
        self.line_start(node.line) == Some(node.column)
    }

    /// Iterates over `id` and all its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Returns the node of the subtree that comes first in the source.
    ///
    /// Among nodes sharing that position the innermost one wins, so the
    /// result is a token whenever the subtree has one there.
    #[must_use]
    pub fn first_token(&self, id: NodeId) -> NodeId {
        self.descendants(id).fold(id, |best, n| {
            if (self.line(n), self.column(n)) <= (self.line(best), self.column(best)) {
                n
            } else {
                best
            }
        })
    }

    /// Returns the child of `ancestor` whose subtree contains `descendant`.
    #[must_use]
    pub fn child_towards(&self, ancestor: NodeId, descendant: NodeId) -> Option<NodeId> {
        let mut current = descendant;
        loop {
            let parent = self.parent(current)?;
            if parent == ancestor {
                return Some(current);
            }
            current = parent;
        }
    }
}

/// Pre-order iterator returned by [`SyntaxTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Errors raised while assembling a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// No node was added.
    #[error("tree has no root node")]
    Empty,

    /// A second top-level node was added after the root was closed.
    #[error("node at {line}:{column} has no parent but the root is already closed")]
    MultipleRoots {
        /// Line of the offending node.
        line: usize,
        /// Column of the offending node.
        column: usize,
    },

    /// `close` was called with no open node.
    #[error("close() called with no open node")]
    UnexpectedClose,

    /// Nodes were left open at `build` time.
    #[error("{0} node(s) left open")]
    Unclosed(usize),

    /// Line numbers are 1-based.
    #[error("node has line 0; lines are 1-based")]
    InvalidLine,
}

/// Incremental, stack based constructor for [`SyntaxTree`].
///
/// ```
/// use style_lint_core::{NodeKind, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// builder
///     .open(NodeKind::CompilationUnit, 1, 0, "")
///     .leaf(NodeKind::Import, 1, 0, "import")
///     .close();
/// let tree = builder.build().unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    error: Option<TreeError>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and makes it the parent of subsequently added nodes.
    pub fn open(
        &mut self,
        kind: NodeKind,
        line: usize,
        column: usize,
        text: impl Into<String>,
    ) -> &mut Self {
        if let Some(id) = self.push(kind, line, column, text.into()) {
            self.stack.push(id);
        }
        self
    }

    /// Adds a node without children.
    pub fn leaf(
        &mut self,
        kind: NodeKind,
        line: usize,
        column: usize,
        text: impl Into<String>,
    ) -> &mut Self {
        self.push(kind, line, column, text.into());
        self
    }

    /// Closes the most recently opened node.
    pub fn close(&mut self) -> &mut Self {
        if self.stack.pop().is_none() {
            self.fail(TreeError::UnexpectedClose);
        }
        self
    }

    /// Finishes construction.
    ///
    /// # Errors
    ///
    /// Returns the first structural error recorded during construction,
    /// or an error if nodes are left open or nothing was added.
    pub fn build(self) -> Result<SyntaxTree, TreeError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.stack.is_empty() {
            return Err(TreeError::Unclosed(self.stack.len()));
        }
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }

        let nodes = self.nodes;
        let mut line_starts: BTreeMap<usize, usize> = BTreeMap::new();
        for node in &nodes {
            line_starts
                .entry(node.line)
                .and_modify(|c| *c = (*c).min(node.column))
                .or_insert(node.column);
        }

        Ok(SyntaxTree { nodes, line_starts })
    }

    fn push(&mut self, kind: NodeKind, line: usize, column: usize, text: String) -> Option<NodeId> {
        if line == 0 {
            self.fail(TreeError::InvalidLine);
            return None;
        }
        let parent = self.stack.last().copied();
        if parent.is_none() && !self.nodes.is_empty() {
            self.fail(TreeError::MultipleRoots { line, column });
            return None;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            line,
            column,
            text,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        Some(id)
    }

    fn fail(&mut self, error: TreeError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
