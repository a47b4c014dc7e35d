//! End-to-end tests for parens-syntax through its public API.
//!
//! These tests cover happy and unhappy paths, with snapshot testing for the
//! rendered diagnostics.

#[path = "e2e/snapshots.rs"]
mod snapshots;

use rstest::{fixture, rstest};

use parens_syntax::{
    CheckOptions, Checker, DiagnosticKind, Grammar, Position, PythonGrammar, SyntaxError,
};

#[fixture]
fn checker() -> Checker {
    Checker::python(CheckOptions::default())
}

// =============================================================================
// Happy Path: Checking
// =============================================================================

#[rstest]
#[case("")]
#[case("x = 1\n")]
#[case("def greet(name):\n    return f'Hello, {name}'\n")]
#[case("values = [a * b for a, b in pairs]\n")]
fn clean_source_yields_no_diagnostics(checker: Checker, #[case] source: &str) {
    let diagnostics = checker
        .check(source)
        .unwrap_or_else(|err| panic!("check: {err}"));
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}

#[rstest]
fn redundant_grouping_is_located(checker: Checker) {
    let diagnostics = checker
        .check("total = (price * quantity)\n")
        .unwrap_or_else(|err| panic!("check: {err}"));

    let [diagnostic] = diagnostics.as_slice() else {
        panic!("expected one diagnostic, got {diagnostics:?}");
    };
    assert_eq!(diagnostic.kind, DiagnosticKind::RedundantGrouping);
    assert_eq!(diagnostic.position(), Position::new(1, 8));
}

#[rstest]
fn host_supplied_tree_gives_the_same_result(checker: Checker) {
    let source = "while (running):\n    step()\n";
    let tree = PythonGrammar::new()
        .parse(source)
        .unwrap_or_else(|err| panic!("parse: {err}"));

    let from_tree = checker
        .check_tree(source, &tree)
        .unwrap_or_else(|err| panic!("check_tree: {err}"));
    let from_text = checker
        .check(source)
        .unwrap_or_else(|err| panic!("check: {err}"));
    assert_eq!(from_tree, from_text);
    assert_eq!(from_text.len(), 1);
}

#[test]
fn generous_budget_changes_nothing() {
    let source = "x = ((a + b) + c)\n";
    let bounded = Checker::python(CheckOptions {
        pair_timeout: Some(std::time::Duration::from_secs(30)),
        ..CheckOptions::default()
    });
    let unbounded = Checker::python(CheckOptions::default());

    assert_eq!(
        bounded.check(source).unwrap_or_else(|err| panic!("check: {err}")),
        unbounded.check(source).unwrap_or_else(|err| panic!("check: {err}"))
    );
}

// =============================================================================
// Unhappy Path: Invalid Source
// =============================================================================

#[rstest]
#[case("def broken(\n")]
#[case("x = (a\n")]
#[case("if x\n    pass\n")]
fn invalid_source_is_an_error(checker: Checker, #[case] source: &str) {
    let error = checker
        .check(source)
        .expect_err("invalid source should be rejected");
    assert!(
        matches!(error, SyntaxError::InvalidSource { .. }),
        "unexpected error: {error}"
    );
}
