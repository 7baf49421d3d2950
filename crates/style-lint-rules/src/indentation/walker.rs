//! Per-file driver.

use style_lint_core::{NodeId, SyntaxTree};
use tracing::{debug, trace, warn};

use super::factory::HandlerFactory;
use super::handlers::{Env, Findings, Handler, HandlerId, HandlerRecord};
use super::level::IndentLevel;
use super::options::IndentOptions;
use super::violation::{IndentViolation, ViolationLog};

/// Checks the indentation of a whole file.
///
/// Handlers are created in pre-order; each one gets its level from its
/// parent before its own check runs. A handler that meets an unexpected
/// tree shape drops its findings and the walk goes on with its children.
#[must_use]
pub fn check_tree(tree: &SyntaxTree, options: &IndentOptions) -> Vec<IndentViolation> {
    let factory = HandlerFactory::new();
    let env = Env {
        tree,
        options,
        factory: &factory,
    };
    let mut walker = Walker {
        env: &env,
        records: Vec::new(),
        log: ViolationLog::default(),
    };
    walker.visit(tree.root(), None);
    debug!(
        handlers = walker.records.len(),
        violations = walker.log.len(),
        "indentation walk finished"
    );
    walker.log.into_violations()
}

struct Walker<'a> {
    env: &'a Env<'a>,
    records: Vec<HandlerRecord>,
    log: ViolationLog,
}

impl Walker<'_> {
    fn visit(&mut self, node: NodeId, parent: Option<HandlerId>) {
        let tree = self.env.tree;
        let mut current = parent;
        if let Some(kind) = self.env.factory.create(tree, node) {
            let inherited = match parent {
                Some(id) => Handler::new(self.env, &self.records, id).suggest(node),
                None => IndentLevel::exact(0),
            };
            let indent = (kind.behavior().indent)(self.env, node, inherited);
            trace!(line = tree.line(node), ?kind, %indent, "handler");

            let id = HandlerId(self.records.len());
            self.records.push(HandlerRecord {
                node,
                kind,
                parent,
                indent,
            });
            self.run_check(id);
            current = Some(id);
        }
        for &child in tree.children(node) {
            self.visit(child, current);
        }
    }

    fn run_check(&mut self, id: HandlerId) {
        let handler = Handler::new(self.env, &self.records, id);
        let mut findings = Findings::default();
        match (handler.behavior().check)(&handler, &mut findings) {
            Ok(()) => self.log.extend(findings.into_violations()),
            Err(err) => warn!(
                line = self.env.tree.line(handler.node()),
                "skipping indentation of {}: {err}",
                handler.label()
            ),
        }
    }
}
