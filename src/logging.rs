//! tracing-subscriber setup for the binary.

use tracing_subscriber::{filter::Directive, fmt::time::ChronoLocal, EnvFilter};

/// Environment variable holding the log filter, e.g. `SCRIPTORIUM_LOG_LEVEL=debug`
pub const LOG_LEVEL_ENV_VAR: &str = "SCRIPTORIUM_LOG_LEVEL";

/// Dependencies that stay at `warn` whatever the filter says
const QUIET_TARGETS: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_rustls",
    "rustls",
    "tracing",
    "tracing_subscriber",
];

/// Build the filter from the environment, falling back to `debug` when
/// verbose and `warn` otherwise.
pub fn build_env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    for target in QUIET_TARGETS {
        if let Ok(directive) = format!("{target}=warn").parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean. Returns false if a subscriber was already set.
pub fn init_tracing_subscriber(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_env_filter_should_quiet_dependencies() {
        let filter = build_env_filter(true).to_string();
        assert!(filter.contains("reqwest=warn"));
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    fn init_tracing_subscriber_should_only_install_once() {
        // Test that the function doesn't panic when called twice
        init_tracing_subscriber(false);
        assert!(!init_tracing_subscriber(false));
    }
}
