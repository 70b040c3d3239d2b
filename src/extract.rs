use crate::document::{LopdfDocument, PdfDocument};
use crate::error::PdfError;
use std::path::Path;
use tracing::debug;

/// Concatenates the text of every page in order, one newline after each
/// page, and trims the result. Pages without text contribute an empty line.
pub fn collect_text<D: PdfDocument>(doc: &D) -> Result<String, PdfError> {
    let mut text = String::new();
    for page in doc.page_numbers() {
        let page_text = doc.page_text(page)?.unwrap_or_default();
        debug!(page, chars = page_text.chars().count(), "extracted page");
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text.trim().to_string())
}

/// Opens `path` and extracts its text. The document is dropped before
/// returning, whether extraction succeeded or not.
pub fn extract_text(path: &Path) -> Result<String, PdfError> {
    let doc = LopdfDocument::open(path)?;
    debug!(path = %doc.path().display(), "extracting text");
    collect_text(&doc)
}
