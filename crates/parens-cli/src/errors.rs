//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use parens_syntax::SyntaxError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {path}: {source}")]
    ReadSource { path: PathBuf, source: io::Error },
    #[error("failed to check {path}: {source}")]
    Check { path: PathBuf, source: SyntaxError },
    #[error("failed to write diagnostics: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    pub(crate) fn read_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadSource {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn check(path: impl Into<PathBuf>, source: SyntaxError) -> Self {
        Self::Check {
            path: path.into(),
            source,
        }
    }
}
