//! Diagnostics reported to the host linter.

use std::fmt;

use crate::position::Position;

/// The kinds of finding the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// Grouping punctuation that can be removed without changing the tree.
    RedundantGrouping,
    /// An assignment target wrapped in parentheses for unpacking.
    ParenthesizedUnpacking,
    /// A tuple that would read better with parentheses.
    ///
    /// Reserved for hosts that share the code table; no rule emits it.
    MissingTupleParens,
}

impl DiagnosticKind {
    /// Returns the stable diagnostic code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::RedundantGrouping => "PAR001",
            Self::ParenthesizedUnpacking => "PAR002",
            Self::MissingTupleParens => "PAR003",
        }
    }

    /// Returns the full message, code included.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RedundantGrouping => "PAR001: Too many parentheses",
            Self::ParenthesizedUnpacking => "PAR002: Don't use parentheses for unpacking",
            Self::MissingTupleParens => "PAR003: Missing parentheses around tuple",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Diagnostic {
    /// Line number (one-based).
    pub line: usize,
    /// Byte column (zero-based).
    pub column: usize,
    /// What was found.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a diagnostic at `position`.
    #[must_use]
    pub const fn at(position: Position, kind: DiagnosticKind) -> Self {
        Self {
            line: position.line,
            column: position.column,
            kind,
        }
    }

    /// Returns the diagnostic's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}
