//! Maps syntax tree nodes to handler kinds.

use std::collections::HashMap;

use style_lint_core::{NodeId, NodeKind, SyntaxTree};

use super::handlers::{body_of, is_chain_root, HandlerKind};

type Constructor = fn(&SyntaxTree, NodeId) -> Option<HandlerKind>;

/// Registration table from node kind to handler constructor.
///
/// Nodes whose kind is not registered are not handled; their lines are
/// checked by the nearest handled ancestor.
pub(crate) struct HandlerFactory {
    table: HashMap<NodeKind, Constructor>,
}

impl Default for HandlerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerFactory {
    pub(crate) fn new() -> Self {
        let mut factory = Self {
            table: HashMap::new(),
        };
        factory.register(&[NodeKind::CompilationUnit], |_, _| Some(HandlerKind::File));
        factory.register(
            &[
                NodeKind::ClassDef,
                NodeKind::InterfaceDef,
                NodeKind::EnumDef,
                NodeKind::RecordDef,
                NodeKind::AnnotationDef,
            ],
            |_, _| Some(HandlerKind::TypeDef),
        );
        factory.register(&[NodeKind::ObjBlock], |_, _| Some(HandlerKind::ObjBlock));
        factory.register(&[NodeKind::MethodDef, NodeKind::CtorDef], |_, _| {
            Some(HandlerKind::Method)
        });
        factory.register(
            &[
                NodeKind::StaticInit,
                NodeKind::If,
                NodeKind::For,
                NodeKind::While,
                NodeKind::Try,
                NodeKind::Catch,
                NodeKind::Finally,
                NodeKind::Synchronized,
            ],
            |_, _| Some(HandlerKind::BlockParent),
        );
        factory.register(&[NodeKind::Else], |_, _| Some(HandlerKind::Else));
        factory.register(&[NodeKind::Do], |_, _| Some(HandlerKind::DoWhile));
        factory.register(&[NodeKind::Switch], |tree, node| {
            Some(if in_statement_position(tree, node) {
                HandlerKind::Switch
            } else {
                HandlerKind::SwitchExpr
            })
        });
        factory.register(&[NodeKind::CaseGroup], |_, _| Some(HandlerKind::CaseGroup));
        factory.register(&[NodeKind::Block], |tree, node| {
            Some(if is_owned_block(tree, node) {
                HandlerKind::OwnedBlock
            } else {
                HandlerKind::Block
            })
        });
        factory.register(
            &[
                NodeKind::PackageDef,
                NodeKind::Import,
                NodeKind::EnumConstant,
                NodeKind::VariableDef,
                NodeKind::ExprStmt,
                NodeKind::Return,
                NodeKind::Break,
                NodeKind::Continue,
                NodeKind::Throw,
                NodeKind::Yield,
                NodeKind::Assert,
                NodeKind::Labeled,
                NodeKind::Empty,
            ],
            |_, _| Some(HandlerKind::Statement),
        );
        factory.register(&[NodeKind::ArrayInit], |_, _| Some(HandlerKind::ArrayInit));
        factory.register(&[NodeKind::Lambda], |_, _| Some(HandlerKind::Lambda));
        factory.register(&[NodeKind::Call, NodeKind::Dot], |tree, node| {
            is_chain_root(tree, node).then_some(HandlerKind::MemberChain)
        });
        factory
    }

    fn register(&mut self, kinds: &[NodeKind], constructor: Constructor) {
        for &kind in kinds {
            self.table.insert(kind, constructor);
        }
    }

    /// Handler kind for `node`, or `None` if the node is not handled.
    pub(crate) fn create(&self, tree: &SyntaxTree, node: NodeId) -> Option<HandlerKind> {
        self.table
            .get(&tree.kind(node))
            .and_then(|constructor| constructor(tree, node))
    }

    #[cfg(test)]
    pub(crate) fn is_handled(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        self.create(tree, node).is_some()
    }
}

/// Returns `true` if `node` stands where a statement may stand.
fn in_statement_position(tree: &SyntaxTree, node: NodeId) -> bool {
    let Some(parent) = tree.parent(node) else {
        return true;
    };
    match tree.kind(parent) {
        NodeKind::Block
        | NodeKind::CaseGroup
        | NodeKind::ObjBlock
        | NodeKind::CompilationUnit
        | NodeKind::Labeled => true,
        NodeKind::If
        | NodeKind::Else
        | NodeKind::For
        | NodeKind::While
        | NodeKind::Do => body_of(tree, parent) == Some(node),
        _ => false,
    }
}

/// Returns `true` for a block whose braces belong to its parent construct.
fn is_owned_block(tree: &SyntaxTree, node: NodeId) -> bool {
    tree.parent(node).is_some_and(|parent| {
        matches!(
            tree.kind(parent),
            NodeKind::If
                | NodeKind::Else
                | NodeKind::For
                | NodeKind::While
                | NodeKind::Do
                | NodeKind::Try
                | NodeKind::Catch
                | NodeKind::Finally
                | NodeKind::Synchronized
                | NodeKind::Switch
                | NodeKind::StaticInit
                | NodeKind::MethodDef
                | NodeKind::CtorDef
                | NodeKind::Lambda
        )
    })
}
