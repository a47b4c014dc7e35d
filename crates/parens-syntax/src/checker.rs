//! The entry point a host linter calls once per file.

use std::time::Duration;

use tracing::{debug, info};

use crate::brackets::match_brackets;
use crate::classifier::classify;
use crate::diagnostic::Diagnostic;
use crate::equivalence::EquivalenceTester;
use crate::error::SyntaxError;
use crate::grammar::{Grammar, PythonGrammar};
use crate::syntax::SyntaxTree;

/// Name under which the checker registers with a host.
pub const PLUGIN_NAME: &str = "parens";

/// Version reported to a host.
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tracing target for per-file checks.
const CHECKER_TARGET: &str = "parens_syntax::checker";

/// Tuning knobs for a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Test bracket pairs on the rayon thread pool.
    pub parallel: bool,
    /// Wall-clock budget for each re-parse. `None` means unbounded.
    pub pair_timeout: Option<Duration>,
}

/// Finds redundant grouping punctuation in source files.
///
/// # Examples
///
/// ```
/// use parens_syntax::{CheckOptions, Checker, DiagnosticKind};
///
/// let checker = Checker::python(CheckOptions::default());
/// let diagnostics = checker.check("x = (a + b)\n")?;
///
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].kind, DiagnosticKind::RedundantGrouping);
/// # Ok::<(), parens_syntax::SyntaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Checker<G: Grammar = PythonGrammar> {
    grammar: G,
    options: CheckOptions,
}

impl Checker<PythonGrammar> {
    /// Creates a checker for Python source.
    #[must_use]
    pub const fn python(options: CheckOptions) -> Self {
        Self::new(PythonGrammar::new(), options)
    }
}

impl<G: Grammar> Checker<G> {
    /// Creates a checker over `grammar`.
    #[must_use]
    pub const fn new(grammar: G, options: CheckOptions) -> Self {
        Self { grammar, options }
    }

    /// Returns the grammar in use.
    #[must_use]
    pub const fn grammar(&self) -> &G {
        &self.grammar
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> CheckOptions {
        self.options
    }

    /// Parses `source` and reports its redundant grouping.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidSource`] when `source` does not parse,
    /// or [`SyntaxError::UnbalancedBrackets`] when its tokens do not balance.
    pub fn check(&self, source: &str) -> Result<Vec<Diagnostic>, SyntaxError> {
        let tree = self.grammar.parse(source)?;
        self.check_tree(source, &tree)
    }

    /// Reports redundant grouping for a tree the caller already parsed.
    ///
    /// `tree` must be the grammar's parse of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnbalancedBrackets`] when the tree's tokens do
    /// not balance.
    pub fn check_tree(
        &self,
        source: &str,
        tree: &SyntaxTree,
    ) -> Result<Vec<Diagnostic>, SyntaxError> {
        let lines: Vec<&str> = source.split('\n').collect();
        let pairs = match_brackets(tree.tokens(), &lines)?;
        debug!(
            target: CHECKER_TARGET,
            grammar = self.grammar.name(),
            pairs = pairs.len(),
            "matched bracket pairs"
        );

        let baseline = self.grammar.dump(tree);
        let tester = EquivalenceTester::new(&self.grammar, source, &baseline)
            .with_budget(self.options.pair_timeout);
        let redundant = tester.redundant_pairs(&pairs, self.options.parallel);
        let diagnostics = classify(tree.root(), &redundant);

        info!(
            target: CHECKER_TARGET,
            grammar = self.grammar.name(),
            pairs = pairs.len(),
            redundant = redundant.len(),
            diagnostics = diagnostics.len(),
            "checked source"
        );
        Ok(diagnostics)
    }
}
