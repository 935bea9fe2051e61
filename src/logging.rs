//! tracing subscriber setup
//!
//! Logs always go to stderr so stdout only ever carries greeting text.

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR, VERBOSE_LOG_FILTER};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `GREETER_LOG` wins, then `--verbose`, then `warn`.
pub fn filter_directive(env_value: Option<&str>, verbose: bool) -> String {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directive) => directive.to_string(),
        None if verbose => VERBOSE_LOG_FILTER.to_string(),
        None => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(env_value.as_deref(), verbose);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid {}={:?}: {}", LOG_ENV_VAR, directive, e);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_defaults_to_warn() {
        assert_eq!(filter_directive(None, false), "warn");
    }

    #[test]
    fn test_filter_verbose() {
        assert_eq!(filter_directive(None, true), "debug");
    }

    #[test]
    fn test_filter_env_wins() {
        assert_eq!(filter_directive(Some("greeter=trace"), true), "greeter=trace");
        assert_eq!(filter_directive(Some("error"), false), "error");
    }

    #[test]
    fn test_filter_blank_env_ignored() {
        assert_eq!(filter_directive(Some("   "), false), "warn");
        assert_eq!(filter_directive(Some(""), true), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
