//! Tree-sitter parsing wrapper with error collection.
//!
//! Tree-sitter is error tolerant and always produces a tree. Redundancy
//! analysis needs a strict yes or no, so [`ParseResult::first_error`] exposes
//! the first ERROR or MISSING node for callers to reject the parse.

use crate::error::SyntaxError;
use crate::position::Position;

/// Result of parsing source code.
#[derive(Debug)]
pub(crate) struct ParseResult {
    tree: tree_sitter::Tree,
}

impl ParseResult {
    /// Returns the root node of the syntax tree.
    pub(crate) fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns whether the parse result contains any syntax errors.
    #[cfg(test)]
    pub(crate) fn has_errors(&self) -> bool {
        find_error_node(self.root_node()).is_some()
    }

    /// Returns the first syntax error in document order, if any.
    pub(crate) fn first_error(&self, source: &str) -> Option<SyntaxErrorInfo> {
        find_error_node(self.root_node()).map(|node| SyntaxErrorInfo::from_node(node, source))
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyntaxErrorInfo {
    /// Where the error starts.
    pub(crate) position: Position,
    /// Human-readable description of the error.
    pub(crate) message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let context = source
            .get(node.byte_range())
            .map(|s| {
                if s.len() > 50 {
                    let truncated: String = s.chars().take(47).collect();
                    format!("{truncated}...")
                } else {
                    s.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else if context.is_empty() {
            "syntax error".to_owned()
        } else {
            format!("syntax error near {context:?}")
        };

        Self {
            position: Position::from_point(node.start_position()),
            message,
        }
    }
}

impl From<SyntaxErrorInfo> for SyntaxError {
    fn from(info: SyntaxErrorInfo) -> Self {
        Self::invalid_source(info.position, info.message)
    }
}

/// Tree-sitter parser configured for one grammar.
pub(crate) struct Parser {
    inner: tree_sitter::Parser,
    grammar: &'static str,
}

impl Parser {
    /// Creates a parser for `language`, reported as `grammar` in errors.
    pub(crate) fn new(
        grammar: &'static str,
        language: &tree_sitter::Language,
    ) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(language)
            .map_err(|e| SyntaxError::parser_init(grammar, e.to_string()))?;

        Ok(Self { inner, grammar })
    }

    /// Parses source code and returns the result.
    pub(crate) fn parse(&mut self, source: &str) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.grammar, "parsing failed"))?;

        Ok(ParseResult { tree })
    }
}

/// Finds the first ERROR or MISSING node in document order.
fn find_error_node(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(find_error_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn python() -> Parser {
        Parser::new("python", &tree_sitter_python::LANGUAGE.into()).expect("parser init")
    }

    #[rstest]
    #[case("def hello():\n    pass\n")]
    #[case("x = (a + b) * c\n")]
    #[case("")]
    fn parser_parses_valid_source(#[case] source: &str) {
        let result = python().parse(source).expect("parse");
        assert!(!result.has_errors());
        assert!(result.first_error(source).is_none());
    }

    #[rstest]
    #[case("def broken(")]
    #[case("x = \n")]
    #[case("x = (a\n")]
    fn parser_detects_syntax_errors(#[case] source: &str) {
        let result = python().parse(source).expect("parse");
        assert!(result.has_errors());
        assert!(result.first_error(source).is_some());
    }

    #[test]
    fn syntax_error_info_has_line() {
        let source = "def test():\n    x = \n";
        let result = python().parse(source).expect("parse");

        let error = result.first_error(source).expect("has error");
        assert!(error.position.line >= 1);
        assert!(!error.message.is_empty());
    }
}
