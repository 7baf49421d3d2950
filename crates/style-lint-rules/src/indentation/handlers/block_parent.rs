//! Keyword constructs that own a body: `if`, `for`, `while`, `try`,
//! `catch`, `finally`, `synchronized` and static initializers.

use style_lint_core::{NodeId, NodeKind};

use super::{
    body_indent, body_of, check_braces, header_of, union, wrapping, Behavior, Findings, Handler,
    StructureError, DEFAULT,
};
use crate::indentation::level::IndentLevel;

pub(crate) const BLOCK_PARENT: Behavior = Behavior {
    check,
    suggest,
    ..DEFAULT
};

/// `else` bodies that are themselves an `if` stay on the `else` level.
pub(crate) const ELSE: Behavior = Behavior {
    suggest: suggest_else,
    ..BLOCK_PARENT
};

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    check_parts(handler, true, out)
}

/// Checks keyword, header and body braces.
///
/// Constructs used as expressions skip the keyword, whose column belongs
/// to the enclosing line.
pub(crate) fn check_parts(
    handler: &Handler<'_>,
    check_keyword: bool,
    out: &mut Findings,
) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let label = handler.label();
    let indent = handler.indent();
    let body = body_of(tree, node).ok_or_else(|| handler.missing("body"))?;

    if check_keyword {
        handler.expect_at_line_start(out, node, label, indent);
    }
    let header = header_of(tree, node, Some(body));
    let wrapped = check_condition(handler, &header, tree.line(node), out);

    if tree.kind(body) != NodeKind::Block {
        return Ok(());
    }
    let mut lcurly = union(indent, &indent.shifted(handler.options().brace_adjustment))?;
    if let Some(column) = wrapped {
        lcurly = lcurly.add_acceptable(column);
    }
    check_braces(handler, body, &lcurly, indent, label, out)
}

/// Checks the parenthesised part of a header and its wrapped lines.
///
/// Returns the column of the last wrapped line, if any.
pub(crate) fn check_condition(
    handler: &Handler<'_>,
    header: &[NodeId],
    first_line: usize,
    out: &mut Findings,
) -> Option<usize> {
    let tree = handler.tree();
    let label = handler.label();
    let indent = handler.indent();

    let tokens = || header.iter().flat_map(|&c| tree.descendants(c));
    let lparen = tokens()
        .filter(|&n| tree.kind(n) == NodeKind::LParen)
        .min_by_key(|&n| (tree.line(n), tree.column(n)));
    let rparen = tokens()
        .filter(|&n| tree.kind(n) == NodeKind::RParen)
        .max_by_key(|&n| (tree.line(n), tree.column(n)));

    if let Some(lparen) = lparen {
        if tree.line(lparen) > first_line {
            handler.expect_at_line_start(out, lparen, &format!("{label} lparen"), indent);
        }
    }
    if let (Some(lparen), Some(rparen)) = (lparen, rparen) {
        let aligned = tree.column(rparen) == tree.column(lparen) + 1;
        if !aligned {
            handler.expect_at_line_start(out, rparen, &format!("{label} rparen"), indent);
        }
    }

    let heads = wrapping::line_heads(handler, header);
    let base = handler.line_start(first_line);
    wrapping::check_heads(
        handler,
        heads
            .range(first_line + 1..)
            .map(|(_, &head)| head)
            .filter(|&head| Some(head) != lparen && Some(head) != rparen),
        base,
        out,
    )
}

fn suggest(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let node = handler.node();
    match (tree.child_towards(node, child), body_of(tree, node)) {
        (Some(direct), Some(body)) if direct == body => body_indent(handler, body),
        _ => handler.indent().clone(),
    }
}

fn suggest_else(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    if tree.kind(child) == NodeKind::If && tree.parent(child) == Some(handler.node()) {
        return handler.indent().clone();
    }
    suggest(handler, child)
}
