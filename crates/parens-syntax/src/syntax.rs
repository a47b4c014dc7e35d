//! Lowered syntax trees and their structural dumps.
//!
//! Tree-sitter keeps every grouping parenthesis in the tree as a
//! `parenthesized_expression`, and it names a bare `a, b` differently from
//! `(a, b)`. Comparing raw trees would therefore call every pair of
//! parentheses significant. Lowering rewrites the concrete tree into an
//! abstract shape where grouping leaves no trace, so two sources differing only
//! in redundant grouping produce identical dumps.

use std::collections::VecDeque;
use std::fmt;

use crate::position::{Position, Span};
use crate::token::Token;

/// Node kinds whose grouping is tolerated when nested in one another.
const OPERATOR_KINDS: &[&str] = &[
    "binary_operator",
    "boolean_operator",
    "not_operator",
    "unary_operator",
    "comparison_operator",
    "await",
];

/// Anonymous tokens that carry no structure once the tree is built.
const PUNCTUATION: &[&str] = &["(", ")", "[", "]", "{", "}", ","];

/// A node of a lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: &'static str,
    field: Option<&'static str>,
    named: bool,
    span: Span,
    text: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Returns the normalised node kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the field name this node occupies in its parent, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }

    /// Returns whether this is a named node rather than an anonymous token.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.named
    }

    /// Returns the source extent of the node.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns where the node starts.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.span.start
    }

    /// Returns the source text of a leaf node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns all children, anonymous tokens included.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Iterates over the named children.
    pub fn named_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(|child| child.named)
    }

    /// Returns the first child stored under `field`.
    #[must_use]
    pub fn child_by_field(&self, field: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|child| child.field == Some(field))
    }

    /// Returns whether this node is an operator expression.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.named && OPERATOR_KINDS.contains(&self.kind)
    }

    /// Returns whether this node is a tuple, bracketed or bare.
    #[must_use]
    pub fn is_tuple(&self) -> bool {
        self.kind == "tuple"
    }

    /// Returns whether this node is an assignment statement.
    #[must_use]
    pub fn is_assignment(&self) -> bool {
        self.kind == "assignment"
    }

    /// Iterates over this node and its named descendants breadth first.
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut queue = VecDeque::from([self]);
        std::iter::from_fn(move || {
            let node = queue.pop_front()?;
            queue.extend(node.named_children());
            Some(node)
        })
    }

    fn write_dump(&self, out: &mut String) {
        if !self.named {
            out.push_str(&format!(" {:?}", self.text.as_deref().unwrap_or_default()));
            return;
        }
        out.push_str(" (");
        out.push_str(self.kind);
        if let Some(text) = &self.text {
            out.push_str(&format!(" {text:?}"));
        }
        for child in &self.children {
            child.write_dump(out);
        }
        out.push(')');
    }
}

/// A parsed source: the lowered tree and the token stream it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: SyntaxNode,
    tokens: Vec<Token>,
}

impl SyntaxTree {
    /// Creates a tree from its parts.
    #[must_use]
    pub const fn new(root: SyntaxNode, tokens: Vec<Token>) -> Self {
        Self { root, tokens }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Returns the tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Renders the canonical structural dump of the tree.
    #[must_use]
    pub fn structural_dump(&self) -> StructuralDump {
        let mut out = String::new();
        self.root.write_dump(&mut out);
        StructuralDump(out)
    }
}

/// Canonical, order-preserving rendering of a tree's shape.
///
/// Two trees have equal dumps exactly when their lowered shapes, leaf texts,
/// and operator tokens agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuralDump(String);

impl StructuralDump {
    /// Returns the dump text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructuralDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_start())
    }
}

/// Lowers a Tree-sitter tree rooted at `node`.
pub(crate) fn lower(node: tree_sitter::Node<'_>, source: &str) -> SyntaxNode {
    lower_node(node, None, source).unwrap_or_else(|| SyntaxNode {
        kind: node.kind(),
        field: None,
        named: true,
        span: span_of(node),
        text: None,
        children: Vec::new(),
    })
}

fn span_of(node: tree_sitter::Node<'_>) -> Span {
    Span::new(
        Position::from_point(node.start_position()),
        Position::from_point(node.end_position()),
    )
}

fn lower_node(
    node: tree_sitter::Node<'_>,
    field: Option<&'static str>,
    source: &str,
) -> Option<SyntaxNode> {
    let kind = node.kind();
    if kind == "comment" || (!node.is_named() && PUNCTUATION.contains(&kind)) {
        return None;
    }

    let text = || source.get(node.byte_range()).map(str::to_owned);
    if node.child_count() == 0 || kind == "string" {
        return Some(SyntaxNode {
            kind,
            field,
            named: node.is_named(),
            span: span_of(node),
            text: text(),
            children: Vec::new(),
        });
    }

    let mut children = Vec::new();
    let mut has_comma = false;
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            has_comma |= child.kind() == ",";
            if let Some(lowered) = lower_node(child, cursor.field_name(), source) {
                children.push(lowered);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    let unwrap_single = match kind {
        "parenthesized_expression" => true,
        "tuple_pattern" => !has_comma,
        "argument_list" => {
            !has_comma
                && children.len() == 1
                && children
                    .first()
                    .is_some_and(|child| child.kind == "generator_expression")
        }
        _ => false,
    };
    if unwrap_single && children.iter().filter(|child| child.named).count() == 1 {
        let mut inner = children.into_iter().find(|child| child.named)?;
        inner.field = field;
        return Some(inner);
    }

    if kind == "subscript" && has_comma {
        children = group_subscript_elements(children);
    }

    let normalised = match kind {
        "expression_list" | "pattern_list" | "tuple_pattern" => "tuple",
        "list_pattern" => "list",
        other => other,
    };

    Some(SyntaxNode {
        kind: normalised,
        field,
        named: node.is_named(),
        span: span_of(node),
        text: None,
        children,
    })
}

/// Gathers the comma-separated indices of a subscript into one tuple, the
/// shape a bracketed tuple index already has.
fn group_subscript_elements(children: Vec<SyntaxNode>) -> Vec<SyntaxNode> {
    let (mut elements, mut others): (Vec<_>, Vec<_>) = children
        .into_iter()
        .partition(|child| child.field == Some("subscript"));
    let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
        return others;
    };
    let span = Span::new(first.start(), last.span.end);

    for element in &mut elements {
        element.field = None;
    }
    others.push(SyntaxNode {
        kind: "tuple",
        field: Some("subscript"),
        named: true,
        span,
        text: None,
        children: elements,
    });
    others
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Grammar, PythonGrammar};

    fn dump(source: &str) -> String {
        let tree = PythonGrammar::new().parse(source).expect("valid source");
        tree.structural_dump().to_string()
    }

    #[test]
    fn grouping_parentheses_leave_no_trace() {
        assert_eq!(dump("x = (a + b)\n"), dump("x = a + b\n"));
        assert_eq!(dump("f((a))\n"), dump("f(a)\n"));
    }

    #[test]
    fn bracketed_and_bare_tuples_agree() {
        assert_eq!(dump("x = (a, b)\n"), dump("x = a, b\n"));
        assert_eq!(dump("(a, b) = c\n"), dump("a, b = c\n"));
    }

    #[test]
    fn tuple_indices_agree_with_and_without_brackets() {
        assert_eq!(dump("x = d[(a, b)]\n"), dump("x = d[a, b]\n"));
        assert_eq!(dump("x = d[(a,)]\n"), dump("x = d[a,]\n"));
        assert_ne!(dump("x = d[(a, b)]\n"), dump("x = d[a]\n"));
    }

    #[test]
    fn precedence_changes_the_dump() {
        assert_ne!(dump("x = (a + b) * c\n"), dump("x = a + b * c\n"));
    }

    #[test]
    fn comments_are_ignored() {
        assert_eq!(dump("x = 1  # one\n"), dump("x = 1\n"));
    }

    #[test]
    fn leaf_text_is_part_of_the_dump() {
        assert_ne!(dump("x = a\n"), dump("x = b\n"));
        assert_ne!(dump("x = a + b\n"), dump("x = a - b\n"));
    }

    #[test]
    fn walk_is_breadth_first_over_named_nodes() {
        let tree = PythonGrammar::new().parse("x = a + b\n").expect("valid");
        let kinds: Vec<_> = tree.root().walk().map(SyntaxNode::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "module",
                "expression_statement",
                "assignment",
                "identifier",
                "binary_operator",
                "identifier",
                "identifier",
            ]
        );
    }

    #[test]
    fn lowered_operator_keeps_its_unparenthesised_span() {
        let tree = PythonGrammar::new().parse("x = (a + b)\n").expect("valid");
        let operator = tree
            .root()
            .walk()
            .find(|node| node.is_operator())
            .expect("operator");
        assert_eq!(operator.start(), Position::new(1, 5));
        assert_eq!(operator.span().end, Position::new(1, 10));
    }
}
