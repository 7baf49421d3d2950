//! `switch` statements and expressions and their case groups.

use style_lint_core::{NodeId, NodeKind};

use super::block_parent::{check_parts, BLOCK_PARENT};
use super::{body_of, wrapping, Behavior, Env, Findings, Handler, StructureError, DEFAULT};
use crate::indentation::level::IndentLevel;

pub(crate) const SWITCH: Behavior = Behavior {
    suggest,
    ..BLOCK_PARENT
};

/// A `switch` used as a value takes its level from the line it sits on.
pub(crate) const SWITCH_EXPR: Behavior = Behavior {
    indent: expression_indent,
    check: check_expression,
    checks_own_start: false,
    ..SWITCH
};

pub(crate) const CASE_GROUP: Behavior = Behavior {
    check: check_case_group,
    suggest: suggest_in_case,
    ..DEFAULT
};

fn expression_indent(env: &Env<'_>, node: NodeId, _inherited: IndentLevel) -> IndentLevel {
    let line = env.tree.line(node);
    IndentLevel::exact(env.tree.line_start(line).unwrap_or_default())
}

fn check_expression(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    check_parts(handler, false, out)
}

fn suggest(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let node = handler.node();
    match (tree.child_towards(node, child), body_of(tree, node)) {
        (Some(direct), Some(body)) if direct == body => {
            handler.indent().shifted(handler.options().case_indent)
        }
        _ => handler.indent().clone(),
    }
}

fn check_case_group(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let indent = handler.indent();
    let labels: Vec<NodeId> = tree
        .children(node)
        .iter()
        .copied()
        .filter(|&c| matches!(tree.kind(c), NodeKind::Case | NodeKind::Default))
        .collect();
    let (&first, rest) = labels
        .split_first()
        .ok_or_else(|| handler.missing("case label"))?;

    // Later labels follow the first one when it is placed correctly.
    let mut reference = indent.clone();
    if tree.starts_line(first) && handler.expect(out, first, tree.kind(first).label(), indent) {
        reference = IndentLevel::exact(tree.column(first));
    }
    for &label in rest {
        handler.expect_at_line_start(out, label, tree.kind(label).label(), &reference);
    }

    let wrap = handler.options().line_wrapping_indentation;
    for &label in &labels {
        let expected = indent.shifted(wrap).add_acceptable(tree.column(label) + wrap);
        let heads = wrapping::line_heads(handler, tree.children(label));
        for (_, &head) in heads.range(tree.line(label) + 1..) {
            handler.expect(out, head, tree.text(head), &expected);
        }
    }
    Ok(())
}

fn suggest_in_case(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    if tree.kind(child) == NodeKind::Block && tree.parent(child) == Some(handler.node()) {
        handler.indent().clone()
    } else {
        handler.indent().shifted(handler.options().basic_offset)
    }
}
