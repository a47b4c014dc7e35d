use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default per-pair re-parse budget in milliseconds. Zero means unbounded.
pub const DEFAULT_PAIR_TIMEOUT_MS: u64 = 0;

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default for testing bracket pairs in parallel.
#[must_use]
pub const fn default_parallel() -> bool {
    false
}

/// Default per-pair re-parse budget in milliseconds.
#[must_use]
pub const fn default_pair_timeout_ms() -> u64 {
    DEFAULT_PAIR_TIMEOUT_MS
}
