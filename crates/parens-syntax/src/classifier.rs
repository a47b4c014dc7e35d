//! Turning redundant bracket pairs into diagnostics.
//!
//! Some redundant grouping is kept on purpose because it helps the reader.
//! A single walk over the tree gathers those cases into an immutable
//! [`Exceptions`] value, and [`classify`] then reports every redundant pair the
//! walk did not excuse.

use std::collections::BTreeSet;

use tracing::debug;

use crate::brackets::BracketPair;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::syntax::SyntaxNode;

/// Tracing target for classification.
const CLASSIFIER_TARGET: &str = "parens_syntax::classifier";

/// Redundant pairs excused from reporting, plus the unpacking findings the
/// same walk produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exceptions {
    suppressed: BTreeSet<usize>,
    unpacking: Vec<Diagnostic>,
}

impl Exceptions {
    /// Walks `root` breadth first and records which of the `redundant` pairs
    /// are excused.
    ///
    /// Three rules apply at every node:
    ///
    /// - **Operator chains.** Parentheses around an operator expression nested
    ///   directly in another operator expression document precedence. For
    ///   each such child the pairs are scanned in order: a pair enclosing the
    ///   parent ends the scan, and the first unexcused pair enclosing the
    ///   child is excused.
    /// - **Unpacking.** An assignment whose target tuple starts before its
    ///   first element is reported as parenthesised unpacking, and the pair
    ///   opening at the target is excused so it is not reported twice.
    /// - **Tail tuples.** A tuple ending exactly where its parent ends keeps
    ///   its brackets; every pair enclosing it is excused.
    #[must_use]
    pub fn collect(root: &SyntaxNode, redundant: &[BracketPair]) -> Self {
        let mut suppressed = BTreeSet::new();
        let mut unpacking = Vec::new();

        for node in root.walk() {
            if node.is_operator() {
                excuse_operator_chain(node, redundant, &mut suppressed);
            }
            if node.is_assignment()
                && let Some(diagnostic) = excuse_unpacking(node, redundant, &mut suppressed)
            {
                unpacking.push(diagnostic);
            }
            excuse_tail_tuples(node, redundant, &mut suppressed);
        }

        debug!(
            target: CLASSIFIER_TARGET,
            redundant = redundant.len(),
            suppressed = suppressed.len(),
            unpacking = unpacking.len(),
            "collected exceptions"
        );
        Self {
            suppressed,
            unpacking,
        }
    }

    /// Returns whether the pair at `index` is excused.
    #[must_use]
    pub fn is_suppressed(&self, index: usize) -> bool {
        self.suppressed.contains(&index)
    }

    /// Returns the indices of excused pairs in ascending order.
    pub fn suppressed(&self) -> impl Iterator<Item = usize> + '_ {
        self.suppressed.iter().copied()
    }

    /// Returns the unpacking diagnostics in walk order.
    #[must_use]
    pub fn unpacking(&self) -> &[Diagnostic] {
        &self.unpacking
    }
}

/// Produces the diagnostics for `root` given the pairs proven redundant.
///
/// Unpacking findings come first in walk order, followed by one
/// [`DiagnosticKind::RedundantGrouping`] per unexcused pair in pair order.
#[must_use]
pub fn classify(root: &SyntaxNode, redundant: &[BracketPair]) -> Vec<Diagnostic> {
    let exceptions = Exceptions::collect(root, redundant);
    let mut diagnostics = exceptions.unpacking().to_vec();
    diagnostics.extend(
        redundant
            .iter()
            .enumerate()
            .filter(|(index, _)| !exceptions.is_suppressed(*index))
            .map(|(_, pair)| Diagnostic::at(pair.start(), DiagnosticKind::RedundantGrouping)),
    );
    diagnostics
}

fn excuse_operator_chain(
    node: &SyntaxNode,
    redundant: &[BracketPair],
    suppressed: &mut BTreeSet<usize>,
) {
    let parent = node.span();
    for child in node.named_children().filter(|child| child.is_operator()) {
        let child_span = child.span();
        for (index, pair) in redundant.iter().enumerate() {
            if pair.encloses(&parent) {
                break;
            }
            if pair.encloses(&child_span) && suppressed.insert(index) {
                break;
            }
        }
    }
}

fn excuse_unpacking(
    node: &SyntaxNode,
    redundant: &[BracketPair],
    suppressed: &mut BTreeSet<usize>,
) -> Option<Diagnostic> {
    let target = node.child_by_field("left").filter(|t| t.is_tuple())?;
    let first = target.named_children().next()?;
    if target.start() >= first.start() {
        return None;
    }

    let opening = redundant
        .iter()
        .enumerate()
        .find(|(index, pair)| pair.start() == target.start() && !suppressed.contains(index));
    if let Some((index, _)) = opening {
        suppressed.insert(index);
    }
    Some(Diagnostic::at(
        node.start(),
        DiagnosticKind::ParenthesizedUnpacking,
    ))
}

fn excuse_tail_tuples(node: &SyntaxNode, redundant: &[BracketPair], suppressed: &mut BTreeSet<usize>) {
    let end = node.span().end;
    for tuple in node
        .named_children()
        .filter(|child| child.is_tuple() && child.span().end == end)
    {
        let span = tuple.span();
        suppressed.extend(
            redundant
                .iter()
                .enumerate()
                .filter(|(_, pair)| pair.encloses(&span))
                .map(|(index, _)| index),
        );
    }
}
