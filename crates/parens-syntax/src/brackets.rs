//! Pairing of opening and closing brackets in a token stream.
//!
//! Every pair also records how its opening token should be erased when the
//! equivalence tester removes it. The erasure depends on where the token sits
//! on its line, so that removing a bracket which opens a line does not leave
//! stray indentation or a dangling operator behind.

use crate::error::SyntaxError;
use crate::position::{Position, Span};
use crate::token::{BracketKind, Token, TokenKind};

/// How the opening token of a pair is removed from its line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Erasure {
    /// First byte column replaced.
    pub start_column: usize,
    /// Byte column just past the replaced region.
    pub end_column: usize,
    /// Text written in place of the replaced region.
    pub replacement: &'static str,
}

impl Erasure {
    /// Returns how many bytes the line shrinks by once the erasure is applied.
    #[must_use]
    pub const fn shrink(&self) -> usize {
        self.end_column
            .saturating_sub(self.start_column)
            .saturating_sub(self.replacement.len())
    }
}

/// A matched opening and closing bracket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BracketPair {
    /// Location of the opening token.
    pub open: Span,
    /// Location of the closing token.
    pub close: Span,
    /// Bracket family shared by both tokens.
    pub kind: BracketKind,
    /// Erasure layout for the opening token.
    pub erasure: Erasure,
    /// Whether this pair alone joins the physical lines its contents span.
    ///
    /// Only an outermost pair can be the sole source of implicit line
    /// joining. Erasing such a pair splits the statement, so it is never
    /// redundant even when a lenient parser still accepts the result.
    pub joins_lines: bool,
}

impl BracketPair {
    /// Returns whether the pair's extent, brackets included, covers `span`.
    #[must_use]
    pub fn encloses(&self, span: &Span) -> bool {
        Span::new(self.open.start, self.close.end).contains(span)
    }

    /// Returns where the opening token starts.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.open.start
    }
}

struct OpenBracket {
    index: usize,
    depth: usize,
    span: Span,
    kind: BracketKind,
    erasure: Erasure,
}

/// Matches the brackets of a token stream.
///
/// `lines` holds the source split on `\n` and is used to find the end of a
/// line when an opening bracket is the only token on it. Pairs are returned in
/// the order their closing tokens appear.
///
/// # Errors
///
/// Returns [`SyntaxError::UnbalancedBrackets`] when a closing token has no
/// opening partner, closes a bracket of another kind, or when opening tokens
/// remain unclosed. None of these can happen for a source that parsed.
pub fn match_brackets(tokens: &[Token], lines: &[&str]) -> Result<Vec<BracketPair>, SyntaxError> {
    let mut stack: Vec<OpenBracket> = Vec::new();
    let mut pairs = Vec::new();
    let mut last_line = None;

    for (index, token) in tokens.iter().enumerate() {
        let first_in_line = last_line != Some(token.start().line);
        last_line = Some(token.end().line);

        match token.kind {
            TokenKind::Open(kind) => {
                let next = tokens.get(index.saturating_add(1));
                stack.push(OpenBracket {
                    index,
                    depth: stack.len(),
                    span: token.span,
                    kind,
                    erasure: erasure_for(token, next, first_in_line, lines),
                });
            }
            TokenKind::Close(kind) => {
                let open = stack.pop().ok_or_else(|| {
                    SyntaxError::unbalanced(
                        token.start(),
                        format!("'{}' has no opening bracket", kind.close_symbol()),
                    )
                })?;
                if open.kind != kind {
                    return Err(SyntaxError::unbalanced(
                        token.start(),
                        format!(
                            "'{}' closes '{}' opened at {}",
                            kind.close_symbol(),
                            open.kind.open_symbol(),
                            open.span.start
                        ),
                    ));
                }
                pairs.push(BracketPair {
                    open: open.span,
                    close: token.span,
                    kind,
                    erasure: open.erasure,
                    joins_lines: open.depth == 0 && spans_lines(tokens, open.index, index),
                });
            }
            TokenKind::Other => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(SyntaxError::unbalanced(
            open.span.start,
            format!("'{}' is never closed", open.kind.open_symbol()),
        ));
    }

    Ok(pairs)
}

/// Returns whether the code from the opening token at `open` through the end
/// of the closing token's line continues onto a new physical line anywhere
/// except at the closing token itself.
fn spans_lines(tokens: &[Token], open: usize, close: usize) -> bool {
    let inside = tokens.get(open..close).unwrap_or_default();
    let close_line = tokens.get(close).map(|token| token.start().line);
    let trailing = tokens
        .get(close.saturating_add(1)..)
        .unwrap_or_default()
        .iter()
        .take_while(|token| Some(token.start().line) == close_line);

    let mut code = inside
        .iter()
        .chain(trailing)
        .filter(|token| !token.is_comment());
    let Some(first) = code.next() else {
        return false;
    };
    code.try_fold(first.end().line, |line, token| {
        (token.start().line == line).then_some(token.end().line)
    })
    .is_none()
}

fn erasure_for(
    token: &Token,
    next: Option<&Token>,
    first_in_line: bool,
    lines: &[&str],
) -> Erasure {
    let start_column = token.start().column;

    if !first_in_line {
        return Erasure {
            start_column,
            end_column: token.end().column,
            replacement: " ",
        };
    }

    match next {
        Some(following) if following.start().line == token.end().line => Erasure {
            start_column,
            end_column: following.start().column,
            replacement: "",
        },
        _ => {
            let line_len = token
                .start()
                .line
                .checked_sub(1)
                .and_then(|row| lines.get(row))
                .map_or(token.end().column, |line| line.trim_end_matches('\r').len());
            Erasure {
                start_column,
                end_column: line_len.max(token.end().column),
                replacement: "",
            }
        }
    }
}
