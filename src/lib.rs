pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod logging;
pub mod runner;

// Re-export key items for convenience
pub use config::ExtractorConfig;
pub use document::{LopdfDocument, PdfDocument};
pub use error::{ExtractError, PdfError};
pub use extract::{collect_text, extract_text};
pub use runner::{run, run_with};
