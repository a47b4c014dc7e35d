//! Per-file checking and diagnostic rendering.

use std::fmt;
use std::fs;
use std::path::Path;

use parens_syntax::{Checker, Diagnostic, Grammar};
use tracing::debug;

use crate::errors::AppError;

const REPORT_TARGET: &str = "parens_cli::report";

/// A diagnostic tied to the file it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finding<'a> {
    path: &'a Path,
    diagnostic: Diagnostic,
}

impl fmt::Display for Finding<'_> {
    /// Renders `path:line:column: message` with a one-based column, the
    /// convention editors and compilers use.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.path.display(),
            self.diagnostic.line,
            self.diagnostic.column.saturating_add(1),
            self.diagnostic.kind
        )
    }
}

/// Reads and checks one file, returning its findings sorted by position.
pub(crate) fn check_file<'a, G: Grammar>(
    checker: &Checker<G>,
    path: &'a Path,
) -> Result<Vec<Finding<'a>>, AppError> {
    let source = fs::read_to_string(path).map_err(|error| AppError::read_source(path, error))?;
    let mut diagnostics = checker
        .check(&source)
        .map_err(|error| AppError::check(path, error))?;
    diagnostics.sort();
    debug!(
        target: REPORT_TARGET,
        path = %path.display(),
        diagnostics = diagnostics.len(),
        "checked file"
    );

    Ok(diagnostics
        .into_iter()
        .map(|diagnostic| Finding { path, diagnostic })
        .collect())
}
