//! Lambda expressions.
//!
//! A lambda takes its levels from the line holding its arrow rather than
//! from the handler tree, since it can sit anywhere inside an expression.

use style_lint_core::{NodeId, NodeKind};

use super::{rcurly_of, union, wrapping, Behavior, Findings, Handler, StructureError, DEFAULT};
use crate::indentation::level::IndentLevel;

pub(crate) const LAMBDA: Behavior = Behavior {
    check,
    suggest,
    checks_own_start: false,
    ..DEFAULT
};

fn arrow_of(handler: &Handler<'_>) -> Result<NodeId, StructureError> {
    handler
        .tree()
        .find_child(handler.node(), NodeKind::Arrow)
        .ok_or_else(|| handler.missing("arrow"))
}

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let arrow = arrow_of(handler)?;
    let arrow_start = handler.line_start(tree.line(arrow));
    let children = tree.children(node);
    let split = children.iter().position(|&c| c == arrow).unwrap_or_default();
    let (params, rest) = children.split_at(split);
    let body = rest
        .iter()
        .copied()
        .find(|&c| c != arrow)
        .ok_or_else(|| handler.missing("body"))?;

    // Wrapped parameters line up with the first wrapped one.
    let heads = wrapping::line_heads(handler, params);
    let mut anchor: Option<usize> = None;
    for (_, &head) in heads.range(tree.line(node) + 1..) {
        match anchor {
            None => anchor = Some(tree.column(head)),
            Some(column) => {
                handler.expect(out, head, tree.text(head), &IndentLevel::exact(column));
            }
        }
    }

    let options = handler.options();
    let lambda_start = handler.line_start(tree.line(node));
    if tree.line(arrow) > tree.line(node) {
        let expected = wrapping::continuation_level(options, lambda_start);
        handler.expect_at_line_start(out, arrow, "->", &expected);
    }

    if tree.kind(body) == NodeKind::Block {
        let arrow_level = IndentLevel::exact(arrow_start);
        let lcurly = union(&arrow_level, &arrow_level.shifted(options.brace_adjustment))?;
        handler.expect_at_line_start(out, body, "lambda lcurly", &lcurly);

        let rcurly = rcurly_of(handler, body)?;
        let statement_start = handler.parent().map_or(arrow_start, |parent| {
            handler.line_start(tree.line(tree.first_token(parent.node())))
        });
        let closing = arrow_level
            .add_acceptable(statement_start)
            .add_acceptable(handler.line_start(tree.line(body)));
        handler.expect_at_line_start(out, rcurly, "lambda rcurly", &closing);
    } else {
        let start = tree.first_token(body);
        if tree.line(start) > tree.line(arrow) {
            let expected = wrapping::continuation_level(options, arrow_start);
            handler.expect_at_line_start(out, start, tree.text(start), &expected);
        }
        let heads = wrapping::line_heads(handler, &[body]);
        wrapping::check_heads(
            handler,
            heads.range(tree.line(start) + 1..).map(|(_, &head)| head),
            arrow_start,
            out,
        );
    }
    Ok(())
}

fn suggest(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let node = handler.node();
    let offset = handler.options().basic_offset;
    let arrow_start = tree
        .find_child(node, NodeKind::Arrow)
        .map_or(0, |arrow| handler.line_start(tree.line(arrow)));
    match tree.child_towards(node, child) {
        Some(body) if tree.kind(body) == NodeKind::Block => {
            let level = IndentLevel::exact(arrow_start + offset);
            if tree.starts_line(body) {
                level.add_acceptable(tree.column(body) + offset)
            } else {
                level
            }
        }
        _ => IndentLevel::exact(arrow_start),
    }
}
