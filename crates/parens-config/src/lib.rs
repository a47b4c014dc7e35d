//! Layered configuration for the parens checker.
//!
//! Values are merged from built-in defaults, an optional TOML file,
//! `PARENS_*` environment variables, and command-line flags, with later
//! layers taking precedence. The file is found through `--config-path` or
//! `PARENS_CONFIG_PATH`.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod logging;

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_PAIR_TIMEOUT_MS, default_log_filter, default_log_filter_string,
    default_log_format, default_pair_timeout_ms, default_parallel,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for a checker run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "PARENS")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log lines.
    #[serde(default = "default_log_format")]
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Test bracket pairs in parallel.
    #[serde(default = "default_parallel")]
    #[ortho_config(default = default_parallel())]
    pub parallel: bool,
    /// Wall-clock budget per re-parse in milliseconds; zero disables it.
    #[serde(default = "default_pair_timeout_ms")]
    #[ortho_config(default = default_pair_timeout_ms())]
    pub pair_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            parallel: default_parallel(),
            pair_timeout_ms: default_pair_timeout_ms(),
        }
    }
}

impl Config {
    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Whether bracket pairs are tested in parallel.
    #[must_use]
    pub const fn parallel(&self) -> bool {
        self.parallel
    }

    /// Per-pair re-parse budget, or `None` when unbounded.
    #[must_use]
    pub const fn pair_timeout(&self) -> Option<Duration> {
        match self.pair_timeout_ms {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }
}
