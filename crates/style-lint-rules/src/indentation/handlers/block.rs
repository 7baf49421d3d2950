//! Brace blocks.

use style_lint_core::NodeId;

use super::{
    check_braces, suggest_same, union, Behavior, Findings, Handler, StructureError, DEFAULT,
};
use crate::indentation::level::IndentLevel;

/// A block standing on its own as a statement or case body.
pub(crate) const STANDALONE: Behavior = Behavior {
    check,
    suggest,
    ..DEFAULT
};

/// The body block of another construct, which checks the braces itself.
pub(crate) const OWNED: Behavior = Behavior {
    suggest: suggest_same,
    transparent: true,
    ..DEFAULT
};

fn check(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let indent = handler.indent();
    let lcurly = union(indent, &indent.shifted(handler.options().brace_adjustment))?;
    check_braces(handler, handler.node(), &lcurly, indent, "block", out)
}

fn suggest(handler: &Handler<'_>, _child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let node = handler.node();
    let offset = handler.options().basic_offset;
    let level = handler.indent().shifted(offset);
    if tree.starts_line(node) {
        level.add_acceptable(tree.column(node) + offset)
    } else {
        level
    }
}
