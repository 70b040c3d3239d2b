use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "pdftext.toml";

/// Settings for pdftext. Command-line flags override values loaded from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Emit debug-level logs on stderr
    pub verbose: bool,
    /// tracing filter directive, e.g. "pdftext=debug" (ignored when `verbose` is set)
    pub log_filter: Option<String>,
}

impl ExtractorConfig {
    /// Attempts to load configuration from `pdftext.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }
}
