//! Lexical tokens recovered from a concrete syntax tree.
//!
//! Tree-sitter has no separate token stream, so tokens are the leaves of the
//! concrete tree in source order. String literals, f-strings included, are
//! kept whole so brackets inside interpolations never pair with code outside.

use crate::position::{Position, Span};

/// The three grouping bracket families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `(` and `)`.
    Paren,
    /// `[` and `]`.
    Bracket,
    /// `{` and `}`.
    Brace,
}

impl BracketKind {
    /// Returns the opening symbol.
    #[must_use]
    pub const fn open_symbol(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
            Self::Brace => '{',
        }
    }

    /// Returns the closing symbol.
    #[must_use]
    pub const fn close_symbol(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Brace => '}',
        }
    }
}

/// Classification of a token as far as bracket matching cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An opening bracket.
    Open(BracketKind),
    /// A closing bracket.
    Close(BracketKind),
    /// Anything else.
    Other,
}

impl TokenKind {
    /// Classifies token text.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text {
            "(" => Self::Open(BracketKind::Paren),
            "[" => Self::Open(BracketKind::Bracket),
            "{" => Self::Open(BracketKind::Brace),
            ")" => Self::Close(BracketKind::Paren),
            "]" => Self::Close(BracketKind::Bracket),
            "}" => Self::Close(BracketKind::Brace),
            _ => Self::Other,
        }
    }
}

/// A lexical unit with its source coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Bracket classification.
    pub kind: TokenKind,
    /// Literal text.
    pub text: String,
    /// Location of the token.
    pub span: Span,
}

impl Token {
    /// Creates a token, classifying its text.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        let owned = text.into();
        Self {
            kind: TokenKind::classify(&owned),
            text: owned,
            span,
        }
    }

    /// Returns where the token starts.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.span.start
    }

    /// Returns where the token ends.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.span.end
    }

    /// Returns whether the token is a `#` comment.
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }
}

/// Node kinds emitted as a single token even though they have children.
const ATOMIC_KINDS: &[&str] = &["string"];

/// Collects the tokens under `node` in source order.
pub(crate) fn collect_tokens(node: tree_sitter::Node<'_>, source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    push_tokens(node, source, &mut tokens);
    tokens
}

fn push_tokens(node: tree_sitter::Node<'_>, source: &str, tokens: &mut Vec<Token>) {
    if node.child_count() == 0 || ATOMIC_KINDS.contains(&node.kind()) {
        if node.start_byte() == node.end_byte() {
            return;
        }
        let text = source.get(node.byte_range()).unwrap_or_default();
        let span = Span::new(
            Position::from_point(node.start_position()),
            Position::from_point(node.end_position()),
        );
        tokens.push(Token::new(text, span));
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        push_tokens(child, source, tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("(", TokenKind::Open(BracketKind::Paren))]
    #[case("]", TokenKind::Close(BracketKind::Bracket))]
    #[case("{", TokenKind::Open(BracketKind::Brace))]
    #[case("((", TokenKind::Other)]
    #[case("x", TokenKind::Other)]
    fn classify_recognises_brackets(#[case] text: &str, #[case] expected: TokenKind) {
        assert_eq!(TokenKind::classify(text), expected);
    }

    #[test]
    fn symbols_pair_up() {
        for kind in [BracketKind::Paren, BracketKind::Bracket, BracketKind::Brace] {
            let open = kind.open_symbol().to_string();
            let close = kind.close_symbol().to_string();
            assert_eq!(TokenKind::classify(&open), TokenKind::Open(kind));
            assert_eq!(TokenKind::classify(&close), TokenKind::Close(kind));
        }
    }
}
