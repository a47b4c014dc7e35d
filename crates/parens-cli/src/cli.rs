//! CLI argument definitions for the parens checker.

use std::path::PathBuf;

use clap::Parser;

/// Reports redundant grouping parentheses in Python source files.
///
/// Configuration flags (`--log-filter`, `--log-format`, `--parallel`,
/// `--pair-timeout-ms`, `--config-path`) must precede the paths.
#[derive(Parser, Debug)]
#[command(name = "parens", version)]
pub(crate) struct Cli {
    /// Python files to check.
    #[arg(value_name = "PATH", required = true)]
    pub(crate) paths: Vec<PathBuf>,
}
