//! Continuation lines of constructs that span several lines.
//!
//! A wrapped line is judged by its first token. Lines belonging to a
//! nested construct that checks its own start are left to that construct.

use std::collections::BTreeMap;

use style_lint_core::{NodeId, NodeKind};

use super::{Findings, Handler};
use crate::indentation::level::IndentLevel;
use crate::indentation::options::IndentOptions;

/// Level of a continuation line wrapped from a line starting at `base`.
pub(crate) fn continuation_level(options: &IndentOptions, base: usize) -> IndentLevel {
    let column = base + options.line_wrapping_indentation;
    if options.force_strict_condition {
        IndentLevel::exact(column)
    } else {
        IndentLevel::at_least(column)
    }
}

/// Level of a closing parenthesis that starts a continuation line.
pub(crate) fn closing_paren_level(options: &IndentOptions, base: usize) -> IndentLevel {
    if options.force_strict_condition {
        IndentLevel::exact(base)
    } else {
        IndentLevel::at_least(base)
    }
}

/// First token of every line covered by `roots`, keyed by line.
///
/// Handled subtrees are not entered. Their first token is still taken
/// into account when the nested handler leaves it to its parent.
pub(crate) fn line_heads(handler: &Handler<'_>, roots: &[NodeId]) -> BTreeMap<usize, NodeId> {
    let tree = handler.tree();
    let factory = handler.factory();
    let mut heads: BTreeMap<usize, NodeId> = BTreeMap::new();
    let mut record = |node: NodeId| {
        heads
            .entry(tree.line(node))
            .and_modify(|head| {
                if tree.column(node) <= tree.column(*head) {
                    *head = node;
                }
            })
            .or_insert(node);
    };

    let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();
    while let Some(node) = stack.pop() {
        if let Some(kind) = factory.create(tree, node) {
            if !kind.behavior().checks_own_start {
                record(tree.first_token(node));
            }
            continue;
        }
        record(node);
        stack.extend(tree.children(node).iter().rev());
    }

    heads.retain(|_, head| tree.starts_line(*head));
    heads
}

/// Checks `heads` against the continuation policy for `base`.
///
/// Returns the column of the last head that was checked.
pub(crate) fn check_heads(
    handler: &Handler<'_>,
    heads: impl IntoIterator<Item = NodeId>,
    base: usize,
    out: &mut Findings,
) -> Option<usize> {
    let tree = handler.tree();
    let options = handler.options();
    let mut last = None;
    for head in heads {
        let expected = match tree.kind(head) {
            NodeKind::LCurly
            | NodeKind::RCurly
            | NodeKind::ArrayInit
            | NodeKind::Block
            | NodeKind::ObjBlock
            | NodeKind::CaseGroup
            | NodeKind::Case
            | NodeKind::Default => continue,
            NodeKind::RParen => closing_paren_level(options, base),
            _ => continuation_level(options, base),
        };
        handler.expect(out, head, tree.text(head), &expected);
        last = Some(tree.column(head));
    }
    last
}

/// Checks every line of `roots` after `first_line`, wrapped from the
/// start of `first_line`.
pub(crate) fn check_continuation(
    handler: &Handler<'_>,
    roots: &[NodeId],
    first_line: usize,
    out: &mut Findings,
) -> Option<usize> {
    let heads = line_heads(handler, roots);
    let base = handler.line_start(first_line);
    check_heads(
        handler,
        heads.range(first_line + 1..).map(|(_, &head)| head),
        base,
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_continuation_is_a_threshold() {
        let options = IndentOptions::default();
        assert_eq!(continuation_level(&options, 8), IndentLevel::at_least(12));
        assert_eq!(closing_paren_level(&options, 8), IndentLevel::at_least(8));
    }

    #[test]
    fn strict_continuation_is_exact() {
        let options = IndentOptions::default()
            .force_strict_condition(true)
            .line_wrapping_indentation(8);
        assert_eq!(continuation_level(&options, 4), IndentLevel::exact(12));
        assert_eq!(closing_paren_level(&options, 4), IndentLevel::exact(4));
    }
}
