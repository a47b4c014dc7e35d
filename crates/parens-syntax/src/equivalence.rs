//! Tentative erasure of a bracket pair and re-parse comparison.
//!
//! A pair is redundant when the source with that pair blanked out parses to
//! a tree whose structural dump matches the original. Every failure along
//! the way counts as "not redundant" so one awkward pair never aborts the
//! whole file.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::brackets::BracketPair;
use crate::grammar::Grammar;
use crate::syntax::StructuralDump;

/// Tracing target for equivalence testing.
const EQUIVALENCE_TARGET: &str = "parens_syntax::equivalence";

/// Returns `source` with `pair` erased, or `None` if the pair's coordinates
/// do not fit the text.
///
/// The opening token is replaced according to its [`Erasure`] layout and the
/// closing token by a single space, so columns of every other token on the
/// closing line stay valid.
///
/// [`Erasure`]: crate::brackets::Erasure
#[must_use]
pub fn erase_pair(source: &str, pair: &BracketPair) -> Option<String> {
    let mut lines: Vec<String> = source.split('\n').map(str::to_owned).collect();
    let erasure = &pair.erasure;

    let open_row = pair.open.start.line.checked_sub(1)?;
    let open_line = lines.get_mut(open_row)?;
    let opened = format!(
        "{}{}{}",
        open_line.get(..erasure.start_column)?,
        erasure.replacement,
        open_line.get(erasure.end_column..)?
    );
    *open_line = opened;

    let mut close_column = pair.close.start.column;
    if pair.open.start.line == pair.close.start.line {
        close_column = close_column.checked_sub(erasure.shrink())?;
    }
    let close_row = pair.close.start.line.checked_sub(1)?;
    let close_line = lines.get_mut(close_row)?;
    let closed = format!(
        "{} {}",
        close_line.get(..close_column)?,
        close_line.get(close_column.checked_add(1)?..)?
    );
    *close_line = closed;

    Some(lines.join("\n"))
}

/// Decides, pair by pair, whether erasing a bracket pair keeps the tree.
pub struct EquivalenceTester<'a, G: Grammar> {
    grammar: &'a G,
    source: &'a str,
    baseline: &'a StructuralDump,
    budget: Option<Duration>,
}

impl<'a, G: Grammar> EquivalenceTester<'a, G> {
    /// Creates a tester for `source`, whose tree dumps to `baseline`.
    #[must_use]
    pub const fn new(grammar: &'a G, source: &'a str, baseline: &'a StructuralDump) -> Self {
        Self {
            grammar,
            source,
            baseline,
            budget: None,
        }
    }

    /// Bounds the wall-clock time a single re-parse may take.
    ///
    /// A re-parse that overruns the budget is treated as not redundant.
    #[must_use]
    pub const fn with_budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }

    /// Returns whether erasing `pair` leaves the structural dump unchanged.
    #[must_use]
    pub fn is_redundant(&self, pair: &BracketPair) -> bool {
        if pair.joins_lines {
            debug!(
                target: EQUIVALENCE_TARGET,
                position = %pair.start(),
                "pair joins physical lines; keeping the brackets"
            );
            return false;
        }

        let Some(erased) = erase_pair(self.source, pair) else {
            debug!(
                target: EQUIVALENCE_TARGET,
                position = %pair.start(),
                "pair coordinates do not fit the source"
            );
            return false;
        };

        let started = Instant::now();
        let parsed = self.grammar.parse(&erased);
        let elapsed = started.elapsed();

        if self.budget.is_some_and(|budget| elapsed > budget) {
            warn!(
                target: EQUIVALENCE_TARGET,
                position = %pair.start(),
                elapsed = ?elapsed,
                "re-parse exceeded its budget; keeping the brackets"
            );
            return false;
        }

        let redundant = match parsed {
            Ok(tree) => self.grammar.dump(&tree) == *self.baseline,
            Err(error) => {
                debug!(
                    target: EQUIVALENCE_TARGET,
                    position = %pair.start(),
                    %error,
                    "source without the pair does not parse"
                );
                false
            }
        };
        debug!(
            target: EQUIVALENCE_TARGET,
            position = %pair.start(),
            redundant,
            "tested bracket pair"
        );
        redundant
    }

    /// Returns the redundant pairs among `pairs`, preserving their order.
    ///
    /// With `parallel` set the pairs are tested on the rayon thread pool; the
    /// result is identical either way.
    #[must_use]
    pub fn redundant_pairs(&self, pairs: &[BracketPair], parallel: bool) -> Vec<BracketPair> {
        if parallel {
            pairs
                .par_iter()
                .filter(|pair| self.is_redundant(pair))
                .cloned()
                .collect()
        } else {
            pairs
                .iter()
                .filter(|pair| self.is_redundant(pair))
                .cloned()
                .collect()
        }
    }
}
