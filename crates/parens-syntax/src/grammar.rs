//! The parsing capability the engine depends on.
//!
//! Redundancy detection only needs two things from a host grammar: turn text
//! into a tree, and render a tree into something comparable. [`Grammar`]
//! captures exactly that, so the bracket logic never touches a concrete parser.

use std::fmt;
use std::path::Path;

use crate::error::SyntaxError;
use crate::parser::Parser;
use crate::position::Position;
use crate::syntax::{self, StructuralDump, SyntaxTree};
use crate::token;

/// A grammar able to parse source text and dump trees for comparison.
///
/// Implementations must be shareable across threads because equivalence
/// tests for separate bracket pairs may run in parallel.
pub trait Grammar: Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Parses `source` into a lowered tree and its token stream.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidSource`] when the text is not valid for
    /// the grammar, or a parser error when no tree could be produced.
    fn parse(&self, source: &str) -> Result<SyntaxTree, SyntaxError>;

    /// Renders the canonical structural dump of `tree`.
    fn dump(&self, tree: &SyntaxTree) -> StructuralDump {
        tree.structural_dump()
    }
}

/// Python grammar backed by `tree-sitter-python`.
///
/// A fresh Tree-sitter parser is built per call, which keeps the grammar
/// stateless and `Sync`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PythonGrammar;

impl PythonGrammar {
    /// Creates the grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns whether a file extension names Python source.
    ///
    /// # Examples
    ///
    /// ```
    /// use parens_syntax::PythonGrammar;
    ///
    /// assert!(PythonGrammar::supports_extension("py"));
    /// assert!(!PythonGrammar::supports_extension("rs"));
    /// ```
    #[must_use]
    pub fn supports_extension(ext: &str) -> bool {
        matches!(ext.to_ascii_lowercase().as_str(), "py" | "pyi")
    }

    /// Returns whether a path has a Python extension.
    #[must_use]
    pub fn supports_path(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(Self::supports_extension)
    }

    fn tree_sitter_language() -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }
}

impl Grammar for PythonGrammar {
    fn name(&self) -> &'static str {
        "python"
    }

    fn parse(&self, source: &str) -> Result<SyntaxTree, SyntaxError> {
        let mut parser = Parser::new(self.name(), &Self::tree_sitter_language())?;
        let result = parser.parse(source)?;
        if let Some(error) = result.first_error(source) {
            return Err(error.into());
        }

        let root = result.root_node();
        if let Some(node) = find_bare_named_expression(root) {
            return Err(SyntaxError::invalid_source(
                Position::from_point(node.start_position()),
                "assignment expression must be parenthesised here",
            ));
        }
        Ok(SyntaxTree::new(
            syntax::lower(root, source),
            token::collect_tokens(root, source),
        ))
    }
}

/// Finds the first `:=` expression sitting where Python only accepts it
/// inside parentheses. Tree-sitter's grammar is more lenient here.
fn find_bare_named_expression(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(|child| {
        if child.kind() == "named_expression" && needs_parentheses(node, child) {
            Some(child)
        } else {
            find_bare_named_expression(child)
        }
    })
}

fn needs_parentheses(parent: tree_sitter::Node<'_>, child: tree_sitter::Node<'_>) -> bool {
    let is_field = |field: &str| parent.child_by_field_name(field) == Some(child);
    match parent.kind() {
        "expression_statement" | "return_statement" | "yield" => true,
        "assignment" | "augmented_assignment" => is_field("right"),
        "keyword_argument" | "default_parameter" | "typed_default_parameter" => is_field("value"),
        "lambda" => is_field("body"),
        _ => false,
    }
}

impl fmt::Display for PythonGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
