//! Logging for natlangctl
//!
//! Diagnostics go to stderr through tracing; stdout carries only the
//! session text and command output.
//!
//! Filter priority:
//! 1. $RUST_LOG
//! 2. --log-level flag
//! 3. [log] level from the config file

use natlang_common::NatlangConfig;
use tracing_subscriber::EnvFilter;

/// Used when neither RUST_LOG nor the configured level parses
pub const FALLBACK_LEVEL: &str = "warn";

/// Level from the command line, else from the config file
pub fn effective_level<'a>(flag: Option<&'a str>, config: &'a NatlangConfig) -> &'a str {
    flag.unwrap_or(&config.log.level)
}

/// Build a filter from a RUST_LOG value, falling back to `level`
pub fn filter_from(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}

/// Build the filter from the environment, falling back to `level`
pub fn build_filter(level: &str) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), level)
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_level_used_without_rust_log() {
        let filter = filter_from(None, "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_rust_log_beats_level() {
        let filter = filter_from(Some("trace"), "error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_blank_rust_log_ignored() {
        let filter = filter_from(Some("  "), "info");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_invalid_level_falls_back_to_warn() {
        let filter = filter_from(None, "natlang=bogus");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_flag_beats_config_level() {
        let mut config = NatlangConfig::default();
        config.log.level = "debug".to_string();
        assert_eq!(effective_level(Some("error"), &config), "error");
        assert_eq!(effective_level(None, &config), "debug");
    }
}
