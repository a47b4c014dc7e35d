//! Command-line interface runtime for the parens checker.
//!
//! The module owns argument parsing, configuration bootstrapping, telemetry
//! setup, and the per-file loop. It is exercised both from the binary
//! entrypoint and from tests where configuration loading and IO streams can
//! be substituted.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use parens_config::Config;
use parens_syntax::{CheckOptions, Checker, PythonGrammar};
use tracing::{debug, warn};

mod cli;
mod config;
mod errors;
mod report;
pub mod telemetry;

use cli::Cli;
use config::{ConfigArgumentSplit, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;

const RUNTIME_TARGET: &str = "parens_cli::runtime";

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

/// What the per-file loop observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Outcome {
    findings: usize,
    failures: usize,
}

impl Outcome {
    const fn exit_code(self) -> ExitCode {
        if self.findings == 0 && self.failures == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

struct CliRunner<'a, 'b, W: Write, E: Write, L: ConfigLoader> {
    io: &'a mut IoStreams<'b, W, E>,
    loader: &'a L,
}

impl<'a, 'b, W, E, L> CliRunner<'a, 'b, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: &'a mut IoStreams<'b, W, E>, loader: &'a L) -> Self {
        Self { io, loader }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let cli_arguments = prepare_cli_arguments(&args, &split);

        let cli = match Cli::try_parse_from(cli_arguments) {
            Ok(cli) => cli,
            Err(error) if !error.use_stderr() => {
                return match write!(self.io.stdout, "{error}") {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                };
            }
            Err(error) => return self.fail(&AppError::CliUsage(error)),
        };

        let result = self
            .loader
            .load(&split.config_arguments)
            .and_then(|config| {
                let telemetry = telemetry::initialise(&config)?;
                debug!(
                    target: RUNTIME_TARGET,
                    format = %telemetry.format(),
                    "telemetry ready"
                );
                self.check_paths(&cli.paths, &config)
            });

        match result {
            Ok(outcome) => outcome.exit_code(),
            Err(error) => self.fail(&error),
        }
    }

    fn check_paths(&mut self, paths: &[PathBuf], config: &Config) -> Result<Outcome, AppError> {
        let checker = Checker::python(CheckOptions {
            parallel: config.parallel(),
            pair_timeout: config.pair_timeout(),
        });

        let mut outcome = Outcome::default();
        for path in paths {
            if !PythonGrammar::supports_path(path) {
                warn!(
                    target: RUNTIME_TARGET,
                    path = %path.display(),
                    "checking a file without a Python extension"
                );
            }
            match report::check_file(&checker, path) {
                Ok(findings) => {
                    for finding in &findings {
                        writeln!(self.io.stdout, "{finding}").map_err(AppError::WriteOutput)?;
                    }
                    outcome.findings = outcome.findings.saturating_add(findings.len());
                }
                Err(error) => {
                    self.report(&error);
                    outcome.failures = outcome.failures.saturating_add(1);
                }
            }
        }
        Ok(outcome)
    }

    fn report(&mut self, error: &AppError) {
        // A closed stderr leaves nowhere to report to; the exit code still
        // reflects the failure.
        writeln!(self.io.stderr, "parens: {error}").ok();
    }

    fn fail(&mut self, error: &AppError) -> ExitCode {
        self.report(error);
        ExitCode::FAILURE
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Configuration flags come first, followed by the paths to check. Each
/// diagnostic is written to `stdout` as `path:line:column: message`; errors
/// go to `stderr`. The exit code is non-zero when any diagnostic was
/// reported or any file could not be checked.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
#[must_use]
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    CliRunner::new(io, loader).run(args)
}

fn prepare_cli_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    let mut cli_arguments: Vec<OsString> = Vec::new();
    if let Some(first) = args.first() {
        cli_arguments.push(first.clone());
    }
    if let Some(rest) = args.get(split.command_start..) {
        cli_arguments.extend(rest.iter().cloned());
    }
    cli_arguments
}
