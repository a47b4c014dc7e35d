//! CLI entrypoint for the parens checker.
//!
//! The binary delegates to [`parens_cli::run`], which loads configuration,
//! checks every file named on the command line, and prints one line per
//! diagnostic.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    parens_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
