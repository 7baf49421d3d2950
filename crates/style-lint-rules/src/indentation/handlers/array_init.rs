//! Array initializers `{ a, b, c }`.

use style_lint_core::{NodeId, NodeKind};

use super::{rcurly_of, union, wrapping, Behavior, Findings, Handler, StructureError, DEFAULT};
use crate::indentation::level::IndentLevel;

pub(crate) const ARRAY_INIT: Behavior = Behavior {
    check,
    suggest,
    ..DEFAULT
};

const LABEL: &str = "array initialization";

fn element_level(handler: &Handler<'_>) -> IndentLevel {
    handler.indent().shifted(handler.options().array_init_indent)
}

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let declaration = handler.indent();
    let elements = element_level(handler);
    let wrapped = declaration.shifted(handler.options().line_wrapping_indentation);

    let opening = union(declaration, &wrapped)?;
    handler.expect_at_line_start(out, node, "array initialization lcurly", &opening);

    let rcurly = rcurly_of(handler, node)?;
    for &child in tree.children(node) {
        if child == rcurly || tree.kind(child) == NodeKind::LCurly {
            continue;
        }
        check_element(handler, child, &elements, out);
    }

    let closing = union(&elements, declaration)?;
    handler.expect_at_line_start(out, rcurly, "array initialization rcurly", &closing);
    Ok(())
}

fn check_element(handler: &Handler<'_>, element: NodeId, level: &IndentLevel, out: &mut Findings) {
    let tree = handler.tree();
    let factory = handler.factory();
    let start = tree.first_token(element);

    if let Some(kind) = factory.create(tree, element) {
        if !kind.behavior().checks_own_start && tree.starts_line(start) {
            handler.expect_child(out, start, LABEL, level);
        }
        return;
    }
    if tree.starts_line(start) {
        handler.expect_child(out, start, LABEL, level);
    }
    wrapping::check_continuation(handler, &[element], tree.line(start), out);
}

fn suggest(handler: &Handler<'_>, _child: NodeId) -> IndentLevel {
    element_level(handler)
}
