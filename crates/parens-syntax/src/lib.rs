//! Detection of redundant grouping punctuation in Python source.
//!
//! A bracket pair is redundant when deleting it leaves the parsed tree
//! unchanged. Rather than encode precedence and tuple rules by hand, the
//! crate proves redundancy by erasing each pair, re-parsing the edited text,
//! and comparing structural dumps. A final classification pass keeps the
//! grouping that helps readers and reports the rest.
//!
//! The pipeline has three stages:
//!
//! - **Bracket matching** via [`match_brackets`] pairs opening and closing
//!   tokens and records how each opening token is erased.
//! - **Equivalence testing** via [`EquivalenceTester`] keeps the pairs whose
//!   erasure preserves the tree.
//! - **Classification** via [`classify`] excuses operator chains and tail
//!   tuples, flags parenthesised unpacking, and reports what remains.
//!
//! [`Checker`] runs all three for a host.
//!
//! # Diagnostics
//!
//! | code     | meaning                                   |
//! |----------|-------------------------------------------|
//! | `PAR001` | Too many parentheses                      |
//! | `PAR002` | Don't use parentheses for unpacking       |
//! | `PAR003` | Missing parentheses around tuple (unused) |
//!
//! # Example
//!
//! ```
//! use parens_syntax::{CheckOptions, Checker};
//!
//! let checker = Checker::python(CheckOptions::default());
//! let diagnostics = checker.check("if (ready):\n    go()\n")?;
//!
//! let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, vec!["1:3: PAR001: Too many parentheses"]);
//! # Ok::<(), parens_syntax::SyntaxError>(())
//! ```

mod brackets;
mod checker;
mod classifier;
mod diagnostic;
mod equivalence;
mod error;
mod grammar;
mod parser;
mod position;
mod syntax;
mod token;

pub use brackets::{BracketPair, Erasure, match_brackets};
pub use checker::{CheckOptions, Checker, PLUGIN_NAME, PLUGIN_VERSION};
pub use classifier::{Exceptions, classify};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use equivalence::{EquivalenceTester, erase_pair};
pub use error::SyntaxError;
pub use grammar::{Grammar, PythonGrammar};
pub use position::{Position, Span};
pub use syntax::{StructuralDump, SyntaxNode, SyntaxTree};
pub use token::{BracketKind, Token, TokenKind};

#[cfg(test)]
mod tests;
