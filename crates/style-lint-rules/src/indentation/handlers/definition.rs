//! Type definitions, their bodies and method definitions.

use style_lint_core::{NodeId, NodeKind};

use super::statement::check_declaration;
use super::{
    body_indent, check_braces, declaration_line, rcurly_of, suggest_same, union, wrapping,
    Behavior, Findings, Handler, StructureError, DEFAULT,
};
use crate::indentation::level::IndentLevel;

pub(crate) const TYPE_DEF: Behavior = Behavior {
    check: check_type_def,
    suggest: suggest_same,
    ..DEFAULT
};

pub(crate) const OBJ_BLOCK: Behavior = Behavior {
    check: check_obj_block,
    suggest: suggest_member,
    ..DEFAULT
};

pub(crate) const METHOD: Behavior = Behavior {
    check: check_method,
    suggest: suggest_method,
    ..DEFAULT
};

fn check_type_def(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let header: Vec<NodeId> = tree
        .children(handler.node())
        .iter()
        .copied()
        .filter(|&c| tree.kind(c) != NodeKind::ObjBlock)
        .collect();
    check_declaration(handler, &header, out);
    Ok(())
}

fn check_obj_block(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let indent = handler.indent();
    let adjusted = indent.shifted(handler.options().brace_adjustment);
    let braces = union(indent, &adjusted)?;
    let label = handler.label();

    handler.expect_at_line_start(out, node, &format!("{label} lcurly"), &braces);
    let rcurly = rcurly_of(handler, node)?;
    let closing = braces.add_acceptable(handler.line_start(tree.line(node)));
    handler.expect_at_line_start(out, rcurly, &format!("{label} rcurly"), &closing);
    Ok(())
}

/// Members sit one offset right of the type, or of the line that opens
/// the body.
fn suggest_member(handler: &Handler<'_>, _child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let offset = handler.options().basic_offset;
    let opening = handler.line_start(tree.line(handler.node()));
    handler
        .indent()
        .shifted(offset)
        .add_acceptable(opening + offset)
}

fn check_method(handler: &Handler<'_>, out: &mut Findings) -> Result<(), StructureError> {
    let tree = handler.tree();
    let node = handler.node();
    let indent = handler.indent();
    let body = tree.find_child(node, NodeKind::Block);
    let throws = tree.find_child(node, NodeKind::Throws);

    let header: Vec<NodeId> = tree
        .children(node)
        .iter()
        .copied()
        .filter(|&c| Some(c) != body && Some(c) != throws)
        .collect();
    let mut wrapped = check_declaration(handler, &header, out);

    if let Some(throws) = throws {
        let expected = indent.shifted(handler.options().throws_indent);
        handler.expect_at_line_start(out, throws, "throws", &expected);
        // A trailing `throws` wraps from the declaration, not from the
        // parameter line it shares.
        let base = if tree.starts_line(throws) {
            wrapped = Some(tree.column(throws));
            tree.column(throws)
        } else {
            handler.line_start(declaration_line(tree, node))
        };
        let heads = wrapping::line_heads(handler, tree.children(throws));
        let continued = wrapping::check_heads(
            handler,
            heads.range(tree.line(throws) + 1..).map(|(_, &head)| head),
            base,
            out,
        );
        wrapped = continued.or(wrapped);
    }

    let Some(body) = body else {
        return Ok(());
    };
    let mut lcurly = union(indent, &indent.shifted(handler.options().brace_adjustment))?;
    if let Some(column) = wrapped {
        lcurly = lcurly.add_acceptable(column);
    }
    check_braces(handler, body, &lcurly, indent, handler.label(), out)
}

fn suggest_method(handler: &Handler<'_>, child: NodeId) -> IndentLevel {
    let tree = handler.tree();
    let node = handler.node();
    let body = tree.find_child(node, NodeKind::Block);
    match (tree.child_towards(node, child), body) {
        (Some(direct), Some(body)) if direct == body => body_indent(handler, body),
        _ => handler.indent().clone(),
    }
}
