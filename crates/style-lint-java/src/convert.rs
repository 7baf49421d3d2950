//! Conversion of tree-sitter Java nodes into a [`SyntaxTree`].
//!
//! Most nodes map one to one. A few constructs are reshaped so that the
//! indentation rule sees the parts it reasons about as nodes of their own:
//!
//! - the `else` branch of an `if` becomes an [`NodeKind::Else`] node,
//! - the trailing `while (...)` of a `do` becomes [`NodeKind::DoWhile`],
//! - a qualified call `a.b(c)` becomes `Call[Dot[a . b] (c)]`,
//! - each `case`/`default` label owns its `:` or `->`.

use style_lint_core::{NodeKind, SyntaxTree, TreeBuilder, TreeError};
use tree_sitter::{Node, Point};

pub(crate) struct Converter<'s> {
    source: &'s str,
    lines: Vec<&'s str>,
    tab_width: usize,
    builder: TreeBuilder,
}

impl<'s> Converter<'s> {
    pub(crate) fn new(source: &'s str, tab_width: usize) -> Self {
        Self {
            source,
            lines: source.split('\n').collect(),
            tab_width,
            builder: TreeBuilder::new(),
        }
    }

    pub(crate) fn convert(mut self, root: Node<'_>) -> Result<SyntaxTree, TreeError> {
        self.visit(root);
        self.builder.build()
    }

    fn visit(&mut self, node: Node<'_>) {
        if node.is_extra() {
            return;
        }
        if !node.is_named() {
            let kind = token_kind(node.kind());
            self.leaf(kind, node);
            return;
        }
        match node.kind() {
            "if_statement" => self.with_part(node, NodeKind::If, "else", NodeKind::Else, None),
            "do_statement" => {
                self.with_part(node, NodeKind::Do, "while", NodeKind::DoWhile, Some(";"));
            }
            "method_invocation" => self.method_invocation(node),
            "field_access" => self.field_access(node),
            "switch_block_statement_group" | "switch_rule" => self.case_group(node),
            kind => {
                let mapped = named_kind(kind);
                if mapped == NodeKind::Literal || node.child_count() == 0 {
                    self.leaf(mapped, node);
                } else {
                    self.open(mapped, node, kind);
                    self.visit_all(&children(node));
                    self.builder.close();
                }
            }
        }
    }

    fn visit_all(&mut self, nodes: &[Node<'_>]) {
        for &child in nodes {
            self.visit(child);
        }
    }

    /// Emits `node` as `kind`, grouping the children from the `at` token up
    /// to the `until` token under a node of kind `part`.
    fn with_part(
        &mut self,
        node: Node<'_>,
        kind: NodeKind,
        at: &str,
        part: NodeKind,
        until: Option<&str>,
    ) {
        let kids = children(node);
        let start = kids.iter().position(|c| !c.is_named() && c.kind() == at);
        self.open(kind, node, node.kind());
        match start {
            Some(start) => {
                let end = until
                    .and_then(|u| kids[start..].iter().position(|c| c.kind() == u))
                    .map_or(kids.len(), |offset| start + offset);
                self.visit_all(&kids[..start]);
                self.open_at(part, kids[start].start_position(), at);
                self.visit_all(&kids[start..end]);
                self.builder.close();
                self.visit_all(&kids[end..]);
            }
            None => self.visit_all(&kids),
        }
        self.builder.close();
    }

    fn method_invocation(&mut self, node: Node<'_>) {
        let kids = children(node);
        self.open(NodeKind::Call, node, node.kind());
        match kids.iter().rposition(|c| c.kind() == ".") {
            Some(dot) => {
                let args = kids
                    .iter()
                    .position(|c| c.kind() == "argument_list")
                    .unwrap_or(kids.len());
                self.open_at(NodeKind::Dot, kids[dot].start_position(), ".");
                self.visit_all(&kids[..args]);
                self.builder.close();
                self.visit_all(&kids[args..]);
            }
            None => self.visit_all(&kids),
        }
        self.builder.close();
    }

    fn field_access(&mut self, node: Node<'_>) {
        let kids = children(node);
        match kids.iter().rposition(|c| c.kind() == ".") {
            Some(dot) => self.open_at(NodeKind::Dot, kids[dot].start_position(), "."),
            None => self.open(NodeKind::Expr, node, node.kind()),
        }
        self.visit_all(&kids);
        self.builder.close();
    }

    fn case_group(&mut self, node: Node<'_>) {
        let kids = children(node);
        self.open(NodeKind::CaseGroup, node, node.kind());
        let mut i = 0;
        while i < kids.len() {
            let child = kids[i];
            if child.kind() == "switch_label" {
                let label = children(child);
                let kind = match label.first() {
                    Some(first) if first.kind() == "default" => NodeKind::Default,
                    _ => NodeKind::Case,
                };
                self.open(kind, child, child.kind());
                self.visit_all(&label);
                if let Some(&separator) = kids.get(i + 1) {
                    if matches!(separator.kind(), ":" | "->") {
                        self.visit(separator);
                        i += 1;
                    }
                }
                self.builder.close();
            } else {
                self.visit(child);
            }
            i += 1;
        }
        self.builder.close();
    }

    fn open(&mut self, kind: NodeKind, node: Node<'_>, text: &str) {
        let start = children(node)
            .first()
            .map_or_else(|| node.start_position(), Node::start_position);
        self.open_at(kind, start, text);
    }

    fn open_at(&mut self, kind: NodeKind, point: Point, text: &str) {
        let (line, column) = self.position(point);
        self.builder.open(kind, line, column, text);
    }

    fn leaf(&mut self, kind: NodeKind, node: Node<'_>) {
        let (line, column) = self.position(node.start_position());
        let text = node.utf8_text(self.source.as_bytes()).unwrap_or_default();
        self.builder.leaf(kind, line, column, text);
    }

    /// 1-based line and tab-expanded 0-based column of `point`.
    fn position(&self, point: Point) -> (usize, usize) {
        let line = self.lines.get(point.row).copied().unwrap_or_default();
        (point.row + 1, expand_column(line, point.column, self.tab_width))
    }
}

/// Non-extra children of `node`.
fn children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|c| !c.is_extra())
        .collect()
}

/// Display column of byte offset `byte_column` in `line`.
pub(crate) fn expand_column(line: &str, byte_column: usize, tab_width: usize) -> usize {
    let prefix = line.get(..byte_column).unwrap_or(line);
    prefix.chars().fold(0, |column, c| {
        if c == '\t' {
            (column / tab_width + 1) * tab_width
        } else {
            column + 1
        }
    })
}

fn token_kind(kind: &str) -> NodeKind {
    match kind {
        "{" => NodeKind::LCurly,
        "}" => NodeKind::RCurly,
        "(" => NodeKind::LParen,
        ")" => NodeKind::RParen,
        ";" => NodeKind::Semi,
        "," => NodeKind::Comma,
        ":" => NodeKind::Colon,
        "->" => NodeKind::Arrow,
        k if k.starts_with(|c: char| c.is_ascii_alphabetic()) => NodeKind::Keyword,
        _ => NodeKind::Operator,
    }
}

fn named_kind(kind: &str) -> NodeKind {
    match kind {
        "program" => NodeKind::CompilationUnit,
        "package_declaration" => NodeKind::PackageDef,
        "import_declaration" => NodeKind::Import,
        "class_declaration" => NodeKind::ClassDef,
        "interface_declaration" => NodeKind::InterfaceDef,
        "enum_declaration" => NodeKind::EnumDef,
        "record_declaration" => NodeKind::RecordDef,
        "annotation_type_declaration" => NodeKind::AnnotationDef,
        "class_body" | "interface_body" | "enum_body" | "annotation_type_body" => {
            NodeKind::ObjBlock
        }
        "enum_constant" => NodeKind::EnumConstant,
        "method_declaration" | "annotation_type_element_declaration" => NodeKind::MethodDef,
        "constructor_declaration" | "compact_constructor_declaration" => NodeKind::CtorDef,
        "static_initializer" => NodeKind::StaticInit,
        "modifiers" => NodeKind::Modifiers,
        "marker_annotation" | "annotation" => NodeKind::Annotation,
        "formal_parameters" | "inferred_parameters" => NodeKind::Parameters,
        "throws" => NodeKind::Throws,
        "field_declaration" | "local_variable_declaration" | "constant_declaration" => {
            NodeKind::VariableDef
        }
        "block" | "constructor_body" | "switch_block" => NodeKind::Block,
        "if_statement" => NodeKind::If,
        "for_statement" | "enhanced_for_statement" => NodeKind::For,
        "while_statement" => NodeKind::While,
        "do_statement" => NodeKind::Do,
        "try_statement" | "try_with_resources_statement" => NodeKind::Try,
        "catch_clause" => NodeKind::Catch,
        "finally_clause" => NodeKind::Finally,
        "synchronized_statement" => NodeKind::Synchronized,
        "switch_expression" | "switch_statement" => NodeKind::Switch,
        "expression_statement" | "explicit_constructor_invocation" => NodeKind::ExprStmt,
        "return_statement" => NodeKind::Return,
        "break_statement" => NodeKind::Break,
        "continue_statement" => NodeKind::Continue,
        "throw_statement" => NodeKind::Throw,
        "yield_statement" => NodeKind::Yield,
        "assert_statement" => NodeKind::Assert,
        "labeled_statement" => NodeKind::Labeled,
        "lambda_expression" => NodeKind::Lambda,
        "array_initializer" | "element_value_array_initializer" => NodeKind::ArrayInit,
        "object_creation_expression" => NodeKind::New,
        "argument_list" => NodeKind::Arguments,
        "identifier" | "type_identifier" => NodeKind::Ident,
        "decimal_integer_literal"
        | "hex_integer_literal"
        | "octal_integer_literal"
        | "binary_integer_literal"
        | "decimal_floating_point_literal"
        | "hex_floating_point_literal"
        | "character_literal"
        | "string_literal"
        | "text_block"
        | "null_literal"
        | "true"
        | "false" => NodeKind::Literal,
        _ => NodeKind::Expr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_expand_to_next_stop() {
        assert_eq!(expand_column("\tint x;", 1, 8), 8);
        assert_eq!(expand_column("  \tint x;", 3, 4), 4);
        assert_eq!(expand_column("\t\tx", 2, 4), 8);
        assert_eq!(expand_column("    x", 4, 8), 4);
    }

    #[test]
    fn token_kinds() {
        assert_eq!(token_kind("{"), NodeKind::LCurly);
        assert_eq!(token_kind("->"), NodeKind::Arrow);
        assert_eq!(token_kind("while"), NodeKind::Keyword);
        assert_eq!(token_kind("+="), NodeKind::Operator);
    }
}
