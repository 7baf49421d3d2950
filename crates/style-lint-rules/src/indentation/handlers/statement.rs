//! Simple statements, declarations and other single-line constructs.

use style_lint_core::NodeId;

use super::{
    declaration_line, suggest_same, wrapping, Behavior, Findings, Handler, HandlerKind,
    StructureError, DEFAULT,
};
use crate::indentation::level::IndentLevel;

pub(crate) const STATEMENT: Behavior = Behavior {
    check,
    suggest: suggest_same,
    ..DEFAULT
};

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let roots = tree.children(node);
    if roots.is_empty() {
        if tree.starts_line(node) {
            report_start(handler, node, handler.indent(), out);
        }
    } else {
        check_declaration(handler, roots, out);
    }
    Ok(())
}

/// Checks the lines up to the declaration itself against the handler's
/// level and everything after as continuation.
///
/// Returns the column of the last continuation line, if any.
pub(crate) fn check_declaration(
    handler: &Handler<'_>,
    roots: &[NodeId],
    out: &mut Findings,
) -> Option<usize> {
    let tree = handler.tree();
    let node = handler.node();
    let indent = handler.indent();
    let decl_line = declaration_line(tree, node);

    let heads = wrapping::line_heads(handler, roots);
    for (_, &head) in heads.range(..=decl_line) {
        report_start(handler, head, indent, out);
    }
    let base = handler.line_start(decl_line);
    wrapping::check_heads(
        handler,
        heads.range(decl_line + 1..).map(|(_, &head)| head),
        base,
        out,
    )
}

/// Checks a line starting the construct, naming the enclosing construct
/// when there is one.
fn report_start(handler: &Handler<'_>, head: NodeId, indent: &IndentLevel, out: &mut Findings) {
    let parent = handler
        .enclosing()
        .filter(|p| handler.kind() == HandlerKind::Statement && p.kind() != HandlerKind::File);
    match parent {
        Some(parent) => handler.expect_child(out, head, parent.label(), indent),
        None => handler.expect(out, head, handler.label(), indent),
    };
}
