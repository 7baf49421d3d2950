//! Chains of member accesses and calls such as `a.b().c().d()`.
//!
//! A chain is represented by its outermost link. Segments that open a line
//! must all line up with the first wrapped one.

use std::collections::BTreeSet;

use style_lint_core::{NodeId, NodeKind, SyntaxTree};

use super::{suggest_same, wrapping, Behavior, Findings, Handler, StructureError, DEFAULT};
use crate::indentation::level::IndentLevel;

pub(crate) const MEMBER_CHAIN: Behavior = Behavior {
    check,
    suggest: suggest_same,
    checks_own_start: false,
    transparent: true,
    ..DEFAULT
};

/// Member accesses along the chain, innermost first.
fn spine(tree: &SyntaxTree, root: NodeId) -> Vec<NodeId> {
    let mut dots = Vec::new();
    let mut current = Some(root);
    while let Some(node) = current {
        let first = tree.children(node).first().copied();
        current = match tree.kind(node) {
            NodeKind::Call => first.filter(|&c| tree.kind(c) == NodeKind::Dot),
            NodeKind::Dot => {
                dots.push(node);
                first.filter(|&c| matches!(tree.kind(c), NodeKind::Call | NodeKind::Dot))
            }
            _ => None,
        };
    }
    dots.reverse();
    dots
}

/// Returns `true` for the outermost link of a chain with at least one
/// member access.
pub(crate) fn is_chain_root(tree: &SyntaxTree, node: NodeId) -> bool {
    if !matches!(tree.kind(node), NodeKind::Call | NodeKind::Dot) {
        return false;
    }
    let inner_link = tree.parent(node).is_some_and(|parent| {
        matches!(tree.kind(parent), NodeKind::Call | NodeKind::Dot)
            && tree.children(parent).first() == Some(&node)
    });
    !inner_link && !spine(tree, node).is_empty()
}

/// Token that opens a segment's line: the dot itself, or the member name
/// after a dot that ends the previous line.
fn segment_head(tree: &SyntaxTree, dot: NodeId) -> Option<NodeId> {
    if tree.starts_line(dot) {
        return Some(dot);
    }
    tree.last_child(dot)
        .map(|name| tree.first_token(name))
        .filter(|&name| tree.line(name) > tree.line(dot) && tree.starts_line(name))
}

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let first_line = tree.line(tree.first_token(node));
    let base = handler.line_start(first_line);

    let mut anchor: Option<IndentLevel> = None;
    let mut segment_lines = BTreeSet::new();
    for dot in spine(tree, node) {
        let Some(head) = segment_head(tree, dot) else {
            continue;
        };
        segment_lines.insert(tree.line(head));
        match &anchor {
            None => {
                let expected = wrapping::continuation_level(handler.options(), base);
                handler.expect(out, head, tree.text(head), &expected);
                anchor = Some(IndentLevel::exact(tree.column(head)));
            }
            Some(expected) => {
                handler.expect(out, head, tree.text(head), expected);
            }
        }
    }

    let heads = wrapping::line_heads(handler, tree.children(node));
    wrapping::check_heads(
        handler,
        heads
            .range(first_line + 1..)
            .filter(|(line, _)| !segment_lines.contains(*line))
            .map(|(_, &head)| head),
        base,
        out,
    );
    Ok(())
}
