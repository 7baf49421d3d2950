//! Java source parser using Tree-sitter.

use style_lint_core::{ParseError, SourceParser, SyntaxTree};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::convert::Converter;

/// Default width of a tab stop.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Parses Java source into a [`SyntaxTree`].
///
/// Sources with syntax errors are rejected rather than checked partially.
#[derive(Clone)]
pub struct JavaParser {
    language: Language,
    tab_width: usize,
}

impl JavaParser {
    /// Creates a parser with the default tab width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Sets the width used to expand tabs into columns.
    ///
    /// A width of zero is treated as one.
    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JavaParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaParser")
            .field("tab_width", &self.tab_width)
            .finish_non_exhaustive()
    }
}

impl SourceParser for JavaParser {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(1, format!("failed to load java grammar: {e}")))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(1, "parser produced no tree"))?;
        let root = tree.root_node();
        if let Some(line) = first_error_line(root) {
            return Err(ParseError::new(line, "syntax error"));
        }

        let syntax = Converter::new(source, self.tab_width)
            .convert(root)
            .map_err(|e| ParseError::new(1, e.to_string()))?;
        debug!(nodes = syntax.len(), "converted java tree");
        Ok(syntax)
    }
}

/// Line (1-based) of the first error or missing node under `node`.
fn first_error_line(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error_line);
    found.or(Some(node.start_position().row + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::NodeKind;

    fn parse(src: &str) -> SyntaxTree {
        JavaParser::new().parse(src).unwrap()
    }

    fn kinds(tree: &SyntaxTree) -> Vec<NodeKind> {
        tree.descendants(tree.root()).map(|n| tree.kind(n)).collect()
    }

    #[test]
    fn class_structure() {
        let tree = parse("class A {\n    int x;\n}\n");
        let root = tree.root();
        assert_eq!(tree.kind(root), NodeKind::CompilationUnit);
        let class = tree.children(root)[0];
        assert_eq!(tree.kind(class), NodeKind::ClassDef);
        let body = tree.find_child(class, NodeKind::ObjBlock).unwrap();
        assert_eq!((tree.line(body), tree.column(body)), (1, 8));
        let field = tree.find_child(body, NodeKind::VariableDef).unwrap();
        assert_eq!((tree.line(field), tree.column(field)), (2, 4));
        assert_eq!(tree.line_start(3), Some(0));
    }

    #[test]
    fn else_and_do_while_are_separate_nodes() {
        let tree = parse(
            "class A {\n    void f() {\n        if (a) {\n        } else {\n        }\n        do {\n        } while (b);\n    }\n}\n",
        );
        let kinds = kinds(&tree);
        assert!(kinds.contains(&NodeKind::Else));
        assert!(kinds.contains(&NodeKind::DoWhile));

        let dw = tree
            .descendants(tree.root())
            .find(|&n| tree.kind(n) == NodeKind::DoWhile)
            .unwrap();
        assert_eq!((tree.line(dw), tree.column(dw)), (7, 10));
        let do_node = tree.parent(dw).unwrap();
        assert_eq!(tree.kind(do_node), NodeKind::Do);
        assert_eq!(tree.kind(tree.last_child(do_node).unwrap()), NodeKind::Semi);
    }

    #[test]
    fn qualified_call_is_split_at_the_dot() {
        let tree = parse("class A {\n    void f() {\n        a.b(c);\n    }\n}\n");
        let call = tree
            .descendants(tree.root())
            .find(|&n| tree.kind(n) == NodeKind::Call)
            .unwrap();
        let dot = tree.children(call)[0];
        assert_eq!(tree.kind(dot), NodeKind::Dot);
        assert_eq!(tree.column(dot), 9);
        assert_eq!(tree.text(tree.children(dot)[0]), "a");
        assert_eq!(tree.kind(tree.children(call)[1]), NodeKind::Arguments);
    }

    #[test]
    fn case_labels_own_their_separator() {
        let tree = parse(
            "class A {\n    void f() {\n        switch (x) {\n            case 1:\n            default:\n                break;\n        }\n    }\n}\n",
        );
        let group = tree
            .descendants(tree.root())
            .find(|&n| tree.kind(n) == NodeKind::CaseGroup)
            .unwrap();
        let labels: Vec<NodeKind> = tree
            .children(group)
            .iter()
            .map(|&c| tree.kind(c))
            .collect();
        assert_eq!(
            labels,
            vec![NodeKind::Case, NodeKind::Default, NodeKind::Break]
        );
        let case = tree.children(group)[0];
        assert_eq!(
            tree.kind(tree.last_child(case).unwrap()),
            NodeKind::Colon
        );
    }

    #[test]
    fn tabs_are_expanded() {
        let tree = JavaParser::new()
            .tab_width(4)
            .parse("class A {\n\tint x;\n}\n")
            .unwrap();
        let field = tree
            .descendants(tree.root())
            .find(|&n| tree.kind(n) == NodeKind::VariableDef)
            .unwrap();
        assert_eq!(tree.column(field), 4);
    }

    #[test]
    fn comments_are_skipped() {
        let tree = parse("// header\nclass A {\n    // note\n}\n");
        assert_eq!(tree.line_start(1), None);
        assert_eq!(tree.line_start(3), None);
    }

    #[test]
    fn syntax_error_is_reported_with_line() {
        let err = JavaParser::new()
            .parse("class A {\n    void f( {\n}\n")
            .unwrap_err();
        assert!(err.line >= 1);
        assert!(err.message.contains("syntax error"));
    }
}
