//! Handler family.
//!
//! Every checkable construct gets a [`HandlerRecord`] in a per-file arena.
//! What a record does is looked up in a table of [`Behavior`]s keyed by
//! [`HandlerKind`]: specialised kinds start from a shared behaviour and
//! override single entries with struct update syntax.

mod array_init;
mod block;
mod block_parent;
mod definition;
mod do_while;
mod lambda;
mod member_chain;
mod statement;
mod switch;
pub(crate) mod wrapping;

use style_lint_core::{NodeId, NodeKind, SyntaxTree};
use thiserror::Error;

use super::factory::HandlerFactory;
use super::level::IndentLevel;
use super::options::IndentOptions;
use super::violation::{IndentViolation, ViolationKind};

pub(crate) use member_chain::is_chain_root;

/// Construct families with distinct indentation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerKind {
    File,
    TypeDef,
    ObjBlock,
    Method,
    BlockParent,
    Else,
    DoWhile,
    Switch,
    SwitchExpr,
    CaseGroup,
    Block,
    OwnedBlock,
    Statement,
    ArrayInit,
    Lambda,
    MemberChain,
}

impl HandlerKind {
    pub(crate) fn behavior(self) -> &'static Behavior {
        match self {
            Self::File => &FILE,
            Self::TypeDef => &definition::TYPE_DEF,
            Self::ObjBlock => &definition::OBJ_BLOCK,
            Self::Method => &definition::METHOD,
            Self::BlockParent => &block_parent::BLOCK_PARENT,
            Self::Else => &block_parent::ELSE,
            Self::DoWhile => &do_while::DO_WHILE,
            Self::Switch => &switch::SWITCH,
            Self::SwitchExpr => &switch::SWITCH_EXPR,
            Self::CaseGroup => &switch::CASE_GROUP,
            Self::Block => &block::STANDALONE,
            Self::OwnedBlock => &block::OWNED,
            Self::Statement => &statement::STATEMENT,
            Self::ArrayInit => &array_init::ARRAY_INIT,
            Self::Lambda => &lambda::LAMBDA,
            Self::MemberChain => &member_chain::MEMBER_CHAIN,
        }
    }
}

/// Behaviour record of one handler kind.
pub(crate) struct Behavior {
    /// Derives the handler's own indent from the one its parent offers.
    pub indent: fn(&Env<'_>, NodeId, IndentLevel) -> IndentLevel,
    /// Compares the construct's layout against its acceptable levels.
    pub check: fn(&Handler<'_>, &mut Findings) -> Result<(), StructureError>,
    /// Indent offered to a nested handler; receives the nested node.
    pub suggest: fn(&Handler<'_>, NodeId) -> IndentLevel,
    /// Whether the handler verifies the column of its own first token.
    pub checks_own_start: bool,
    /// Transparent handlers are skipped when naming a child's parent.
    pub transparent: bool,
}

pub(crate) const DEFAULT: Behavior = Behavior {
    indent: inherit,
    check: check_nothing,
    suggest: suggest_offset,
    checks_own_start: true,
    transparent: false,
};

const FILE: Behavior = Behavior {
    suggest: suggest_same,
    ..DEFAULT
};

fn inherit(_env: &Env<'_>, _node: NodeId, inherited: IndentLevel) -> IndentLevel {
    inherited
}

fn check_nothing(_handler: &Handler<'_>, _out: &mut Findings) -> Result<(), StructureError> {
    Ok(())
}

pub(crate) fn suggest_same(handler: &Handler<'_>, _child: NodeId) -> IndentLevel {
    handler.indent().clone()
}

pub(crate) fn suggest_offset(handler: &Handler<'_>, _child: NodeId) -> IndentLevel {
    handler.indent().shifted(handler.options().basic_offset)
}

/// Unexpected tree shape met by a handler.
#[derive(Debug, Error)]
pub(crate) enum StructureError {
    #[error("{construct} at line {line} has no {missing}")]
    MissingPart {
        construct: &'static str,
        line: usize,
        missing: &'static str,
    },

    #[error("cannot merge indentation levels `{0}` and `{1}`")]
    IncompatibleLevels(IndentLevel, IndentLevel),
}

/// Read-only inputs shared by every handler of one file.
pub(crate) struct Env<'a> {
    pub tree: &'a SyntaxTree,
    pub options: &'a IndentOptions,
    pub factory: &'a HandlerFactory,
}

/// Index of a record in the handler arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HandlerId(pub usize);

/// One instantiated handler.
#[derive(Debug)]
pub(crate) struct HandlerRecord {
    pub node: NodeId,
    pub kind: HandlerKind,
    pub parent: Option<HandlerId>,
    pub indent: IndentLevel,
}

/// View of a handler record together with everything it may consult.
#[derive(Clone, Copy)]
pub(crate) struct Handler<'a> {
    env: &'a Env<'a>,
    records: &'a [HandlerRecord],
    id: HandlerId,
}

impl<'a> Handler<'a> {
    pub(crate) fn new(env: &'a Env<'a>, records: &'a [HandlerRecord], id: HandlerId) -> Self {
        Self { env, records, id }
    }

    fn record(&self) -> &'a HandlerRecord {
        &self.records[self.id.0]
    }

    pub(crate) fn node(&self) -> NodeId {
        self.record().node
    }

    pub(crate) fn kind(&self) -> HandlerKind {
        self.record().kind
    }

    pub(crate) fn indent(&self) -> &'a IndentLevel {
        &self.record().indent
    }

    pub(crate) fn tree(&self) -> &'a SyntaxTree {
        self.env.tree
    }

    pub(crate) fn options(&self) -> &'a IndentOptions {
        self.env.options
    }

    pub(crate) fn factory(&self) -> &'a HandlerFactory {
        self.env.factory
    }

    pub(crate) fn behavior(&self) -> &'static Behavior {
        self.kind().behavior()
    }

    pub(crate) fn parent(&self) -> Option<Self> {
        self.record().parent.map(|id| Self { id, ..*self })
    }

    /// Nearest ancestor handler that is not transparent.
    pub(crate) fn enclosing(&self) -> Option<Self> {
        let mut current = self.parent();
        while let Some(h) = current {
            if !h.behavior().transparent {
                return Some(h);
            }
            current = h.parent();
        }
        None
    }

    pub(crate) fn suggest(&self, child: NodeId) -> IndentLevel {
        (self.behavior().suggest)(self, child)
    }

    /// Name of the construct used in diagnostics.
    pub(crate) fn label(&self) -> &'static str {
        let tree = self.tree();
        let node = self.node();
        match tree.kind(node) {
            NodeKind::ObjBlock => tree
                .parent(node)
                .map_or("object def", |p| match tree.kind(p) {
                    NodeKind::New | NodeKind::EnumConstant => "object def",
                    kind => kind.label(),
                }),
            NodeKind::CaseGroup => tree
                .children(node)
                .iter()
                .map(|&c| tree.kind(c))
                .find(|k| matches!(k, NodeKind::Case | NodeKind::Default))
                .map_or("case", NodeKind::label),
            kind => kind.label(),
        }
    }

    /// Column of the leftmost node on `line`.
    pub(crate) fn line_start(&self, line: usize) -> usize {
        self.tree().line_start(line).unwrap_or_default()
    }

    pub(crate) fn missing(&self, missing: &'static str) -> StructureError {
        StructureError::MissingPart {
            construct: self.tree().kind(self.node()).label(),
            line: self.tree().line(self.node()),
            missing,
        }
    }

    /// Reports `node` unless its column is acceptable. Returns acceptance.
    pub(crate) fn expect(
        &self,
        out: &mut Findings,
        node: NodeId,
        label: &str,
        expected: &IndentLevel,
    ) -> bool {
        out.compare(self.tree(), node, label, expected, ViolationKind::Construct)
    }

    /// Like [`Handler::expect`] but in the child message form.
    pub(crate) fn expect_child(
        &self,
        out: &mut Findings,
        node: NodeId,
        label: &str,
        expected: &IndentLevel,
    ) -> bool {
        out.compare(self.tree(), node, label, expected, ViolationKind::Child)
    }

    /// Checks `node` only when it is the first token on its line.
    pub(crate) fn expect_at_line_start(
        &self,
        out: &mut Findings,
        node: NodeId,
        label: &str,
        expected: &IndentLevel,
    ) {
        if self.tree().starts_line(node) {
            self.expect(out, node, label, expected);
        }
    }
}

/// Findings of a single handler check.
///
/// Kept apart from the file log so that a check failing half way through
/// contributes nothing.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    violations: Vec<IndentViolation>,
}

impl Findings {
    fn compare(
        &mut self,
        tree: &SyntaxTree,
        node: NodeId,
        label: &str,
        expected: &IndentLevel,
        kind: ViolationKind,
    ) -> bool {
        let column = tree.column(node);
        if expected.accepts(column) {
            return true;
        }
        self.violations.push(IndentViolation {
            line: tree.line(node),
            column,
            label: label.to_string(),
            expected: expected.clone(),
            kind,
        });
        false
    }

    pub(crate) fn into_violations(self) -> Vec<IndentViolation> {
        self.violations
    }
}

pub(crate) fn union(a: &IndentLevel, b: &IndentLevel) -> Result<IndentLevel, StructureError> {
    a.union(b)
        .ok_or_else(|| StructureError::IncompatibleLevels(a.clone(), b.clone()))
}

/// Body of a block parent: its last child that is a statement, skipping
/// tokens and the `else`/`catch`/`finally`/trailing `while` parts.
pub(crate) fn body_of(tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
    tree.children(node)
        .iter()
        .rev()
        .copied()
        .find(|&c| {
            let kind = tree.kind(c);
            !kind.is_token() && !is_trailing_part(kind)
        })
        .filter(|&c| tree.kind(c).is_statement())
}

/// Children of a block parent other than its body and trailing parts.
pub(crate) fn header_of(tree: &SyntaxTree, node: NodeId, body: Option<NodeId>) -> Vec<NodeId> {
    tree.children(node)
        .iter()
        .copied()
        .filter(|&c| Some(c) != body && !is_trailing_part(tree.kind(c)))
        .collect()
}

fn is_trailing_part(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Else | NodeKind::Catch | NodeKind::Finally | NodeKind::DoWhile
    )
}

/// Closing brace of a brace container.
pub(crate) fn rcurly_of(handler: &Handler<'_>, container: NodeId) -> Result<NodeId, StructureError> {
    let tree = handler.tree();
    tree.last_child(container)
        .filter(|&c| tree.kind(c) == NodeKind::RCurly)
        .ok_or_else(|| handler.missing("closing brace"))
}

/// Line of the first child that is not a modifier list.
pub(crate) fn declaration_line(tree: &SyntaxTree, node: NodeId) -> usize {
    tree.children(node)
        .iter()
        .find(|&&c| tree.kind(c) != NodeKind::Modifiers)
        .map_or_else(|| tree.line(node), |&c| tree.line(tree.first_token(c)))
}

/// Indent offered to the body of a braced or unbraced construct.
///
/// A brace that starts its own line adds its column plus the offset.
pub(crate) fn body_indent(handler: &Handler<'_>, body: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let offset = handler.options().basic_offset;
    let level = handler.indent().shifted(offset);
    if tree.kind(body) == NodeKind::Block && tree.starts_line(body) {
        level.add_acceptable(tree.column(body) + offset)
    } else {
        level
    }
}

/// Verifies both braces of `block`.
///
/// The closing brace may also align with the line that opened the block.
pub(crate) fn check_braces(
    handler: &Handler<'_>,
    block: NodeId,
    lcurly: &IndentLevel,
    rcurly: &IndentLevel,
    label: &str,
    out: &mut Findings,
) -> Result<(), StructureError> {
    let tree = handler.tree();
    let closing = rcurly_of(handler, block)?;
    handler.expect_at_line_start(out, block, &format!("{label} lcurly"), lcurly);
    let rcurly = rcurly.add_acceptable(handler.line_start(tree.line(block)));
    handler.expect_at_line_start(out, closing, &format!("{label} rcurly"), &rcurly);
    Ok(())
}
