//! Diagnostic logging on stderr.
//!
//! Log events never touch stdout, which carries only the extracted text.

use crate::config::ExtractorConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directive: `verbose` wins, then `RUST_LOG`, then the
/// configured `log_filter`, then `warn`.
pub fn directive_for(config: &ExtractorConfig, env_directive: Option<&str>) -> String {
    if config.verbose {
        return "debug".to_string();
    }
    env_directive
        .filter(|d| !d.trim().is_empty())
        .or(config.log_filter.as_deref())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs the global subscriber. Does nothing if one is already set.
pub fn init(config: &ExtractorConfig) {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = directive_for(config, env_directive.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
