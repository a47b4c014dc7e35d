//! Source coordinates shared by tokens, syntax nodes, and diagnostics.
//!
//! Lines are one-based and columns are zero-based byte offsets, matching the
//! coordinates Python tooling reports. Both types are totally ordered so span
//! comparisons never depend on node identity.

use std::fmt;

/// A location in source text.
///
/// Ordering compares the line first and then the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Line number (one-based).
    pub line: usize,
    /// Byte column within the line (zero-based).
    pub column: usize,
}

impl Position {
    /// Creates a position from a one-based line and zero-based column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts a Tree-sitter point (zero-based row) into a position.
    #[must_use]
    pub const fn from_point(point: tree_sitter::Point) -> Self {
        Self {
            line: point.row.saturating_add(1),
            column: point.column,
        }
    }

    /// Returns the position `columns` bytes further along the same line.
    #[must_use]
    pub const fn advance(self, columns: usize) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(columns),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the last covered byte.
    pub end: Position,
}

impl Span {
    /// Creates a span from its bounds.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns whether `other` lies entirely within this span.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
