//! Error types for redundancy analysis.
//!
//! Only two conditions reach callers: an original source that does not parse
//! and a token stream whose brackets do not balance. Failures while testing a
//! single bracket pair are absorbed by the equivalence tester.

use thiserror::Error;

use crate::position::Position;

/// Errors from parsing and bracket analysis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser for the grammar.
    #[error("failed to initialise parser for {grammar}: {message}")]
    ParserInitError {
        /// Name of the grammar that failed to initialise.
        grammar: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// The parser gave up without producing a tree.
    #[error("failed to parse {grammar}: {message}")]
    ParseError {
        /// Name of the grammar that failed to parse.
        grammar: &'static str,
        /// Description of the failure.
        message: String,
    },

    /// The source text contains syntax errors.
    #[error("invalid source at {position}: {message}")]
    InvalidSource {
        /// Location of the first error.
        position: Position,
        /// Description of the first error.
        message: String,
    },

    /// The token stream has a close token without a matching open token, an
    /// open token that is never closed, or a close of the wrong kind.
    #[error("unbalanced brackets at {position}: {message}")]
    UnbalancedBrackets {
        /// Location of the offending token.
        position: Position,
        /// Description of the imbalance.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(grammar: &'static str, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            grammar,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(grammar: &'static str, message: impl Into<String>) -> Self {
        Self::ParseError {
            grammar,
            message: message.into(),
        }
    }

    /// Creates an invalid source error.
    #[must_use]
    pub fn invalid_source(position: Position, message: impl Into<String>) -> Self {
        Self::InvalidSource {
            position,
            message: message.into(),
        }
    }

    /// Creates an unbalanced bracket error.
    #[must_use]
    pub fn unbalanced(position: Position, message: impl Into<String>) -> Self {
        Self::UnbalancedBrackets {
            position,
            message: message.into(),
        }
    }
}
