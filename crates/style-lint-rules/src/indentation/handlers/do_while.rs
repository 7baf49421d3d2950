//! `do { ... } while (cond);`

use style_lint_core::NodeKind;

use super::block_parent::{check_condition, check_parts, BLOCK_PARENT};
use super::{body_of, rcurly_of, Behavior, Findings, Handler, StructureError};

pub(crate) const DO_WHILE: Behavior = Behavior {
    check,
    ..BLOCK_PARENT
};

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    check_parts(handler, true, out)?;

    let tree = handler.tree();
    let node = handler.node();
    let trailer = tree
        .find_child(node, NodeKind::DoWhile)
        .ok_or_else(|| handler.missing("while condition"))?;
    let body = body_of(tree, node).ok_or_else(|| handler.missing("body"))?;

    let mut expected = handler.indent().clone();
    if tree.kind(body) == NodeKind::Block {
        expected = expected.add_acceptable(tree.column(rcurly_of(handler, body)?));
    }
    handler.expect_at_line_start(out, trailer, "do..while while", &expected);
    check_condition(handler, tree.children(trailer), tree.line(trailer), out);
    Ok(())
}
