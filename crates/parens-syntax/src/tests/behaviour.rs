//! Behaviour-driven tests for redundant grouping detection.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{CheckOptions, Checker, Diagnostic, SyntaxError};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string from a feature file, with `\n` escapes expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').replace("\\n", "\n")))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    source: Option<String>,
    result: Option<Result<Vec<Diagnostic>, SyntaxError>>,
    parallel_result: Option<Vec<Diagnostic>>,
}

impl TestWorld {
    fn source(&self) -> &str {
        self.source.as_deref().expect("source should be set")
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        self.result
            .as_ref()
            .expect("source should have been checked")
            .as_ref()
            .expect("check should succeed")
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("Python source {source}")]
fn given_source(world: &mut TestWorld, source: QuotedString) {
    world.source = Some(source.as_str().to_owned());
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the source is checked")]
fn when_checked(world: &mut TestWorld) {
    let checker = Checker::python(CheckOptions::default());
    world.result = Some(checker.check(world.source()));
}

#[when("the source is checked sequentially and in parallel")]
fn when_checked_both_ways(world: &mut TestWorld) {
    when_checked(world);
    let parallel = Checker::python(CheckOptions {
        parallel: true,
        ..CheckOptions::default()
    });
    world.parallel_result = Some(parallel.check(world.source()).expect("parallel check"));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("no diagnostics are reported")]
fn then_no_diagnostics(world: &mut TestWorld) {
    let diagnostics = world.diagnostics();
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics, got {diagnostics:?}"
    );
}

#[then("exactly {count} diagnostics are reported")]
fn then_diagnostic_count(world: &mut TestWorld, count: usize) {
    let diagnostics = world.diagnostics();
    assert_eq!(
        diagnostics.len(),
        count,
        "unexpected diagnostics: {diagnostics:?}"
    );
}

#[then("diagnostic {code} is reported at line {line} column {column}")]
fn then_diagnostic_at(world: &mut TestWorld, code: QuotedString, line: usize, column: usize) {
    let diagnostics = world.diagnostics();
    let found = diagnostics
        .iter()
        .any(|d| d.kind.code() == code.as_str() && d.line == line && d.column == column);
    assert!(
        found,
        "expected {} at {line}:{column}, got {diagnostics:?}",
        code.as_str()
    );
}

#[then("both runs report the same diagnostics")]
fn then_runs_agree(world: &mut TestWorld) {
    let parallel = world
        .parallel_result
        .as_deref()
        .expect("parallel run should have happened");
    assert_eq!(world.diagnostics(), parallel);
}

#[then("checking fails with an invalid source error")]
fn then_invalid_source(world: &mut TestWorld) {
    let result = world.result.as_ref().expect("source should have been checked");
    assert!(
        matches!(result, Err(SyntaxError::InvalidSource { .. })),
        "expected an invalid source error, got {result:?}"
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Source without brackets is clean"
)]
fn clean_source(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Grouping around a whole expression is reported"
)]
fn whole_expression_grouping(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Grouping that changes precedence is kept"
)]
fn precedence_grouping(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Operand grouping in an operator chain is excused"
)]
fn operator_chain_operand(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Parenthesised unpacking is always flagged"
)]
fn parenthesised_unpacking(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "A returned tuple keeps its brackets"
)]
fn returned_tuple(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Grouping spanning lines is required"
)]
fn grouping_spanning_lines(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Statement-level walrus keeps its brackets"
)]
fn statement_level_walrus(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Parallel checking is deterministic"
)]
fn parallel_determinism(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/redundant_parentheses.feature",
    name = "Unparseable source is rejected"
)]
fn unparseable_source(world: TestWorld) {
    let _ = world;
}
