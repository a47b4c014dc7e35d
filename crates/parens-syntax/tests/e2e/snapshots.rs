//! Snapshot tests for the `parens-syntax` end-to-end suite.
//!
//! These tests use `insta` to validate stable, user-facing outputs.

use insta::assert_snapshot;

use parens_syntax::{CheckOptions, Checker, DiagnosticKind, SyntaxError};

fn render(source: &str) -> String {
    Checker::python(CheckOptions::default())
        .check(source)
        .unwrap_or_else(|err| panic!("check: {err}"))
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_mixed_findings() {
    let source = concat!(
        "(first, second) = pair\n",
        "if (first):\n",
        "    total = ((first + second) + 1)\n",
        "    ok = (first < second) and (not total)\n",
        "def both():\n",
        "    return (first, second)\n",
    );

    assert_snapshot!(render(source), @r"
    1:0: PAR002: Don't use parentheses for unpacking
    2:3: PAR001: Too many parentheses
    3:12: PAR001: Too many parentheses
    ");
}

#[test]
fn snapshot_diagnostic_messages() {
    let messages: Vec<_> = [
        DiagnosticKind::RedundantGrouping,
        DiagnosticKind::ParenthesizedUnpacking,
        DiagnosticKind::MissingTupleParens,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_snapshot!(messages.join("\n"), @r"
    PAR001: Too many parentheses
    PAR002: Don't use parentheses for unpacking
    PAR003: Missing parentheses around tuple
    ");
}

#[test]
fn invalid_source_error_names_its_location() {
    let error = Checker::python(CheckOptions::default())
        .check("def broken(\n")
        .expect_err("invalid source");
    assert!(matches!(error, SyntaxError::InvalidSource { .. }));
    assert!(error.to_string().starts_with("invalid source at "));
}
