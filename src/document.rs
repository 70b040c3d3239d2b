//! Opened PDF documents.
//!
//! `PdfDocument` is the seam between page traversal and the PDF backend:
//! anything that can list its pages in order and hand back per-page text
//! can be extracted. `LopdfDocument` is the real backend.

use crate::error::PdfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened document whose pages can be read one at a time.
pub trait PdfDocument {
    /// Page numbers in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extracted text of a single page, or `None` if the page has no text.
    fn page_text(&self, page: u32) -> Result<Option<String>, PdfError>;
}

/// A PDF parsed with lopdf. Owned for the duration of one extraction and
/// released when dropped.
pub struct LopdfDocument {
    path: PathBuf,
    inner: lopdf::Document,
}

impl LopdfDocument {
    /// Loads and parses the file at `path`.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        let inner = lopdf::Document::load(path)?;
        debug!(path = %path.display(), pages = inner.get_pages().len(), "opened document");
        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PdfDocument for LopdfDocument {
    fn page_numbers(&self) -> Vec<u32> {
        // BTreeMap keys, already ascending
        self.inner.get_pages().into_keys().collect()
    }

    fn page_text(&self, page: u32) -> Result<Option<String>, PdfError> {
        let raw = self
            .inner
            .extract_text(&[page])
            .map_err(|source| PdfError::Page { page, source })?;
        Ok(normalize_page_text(&raw))
    }
}

impl Drop for LopdfDocument {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "released document");
    }
}

/// lopdf ends every text object with a line break. Strip the trailing ones
/// so a page's text is just its lines. Only an empty page counts as none.
fn normalize_page_text(raw: &str) -> Option<String> {
    let text = raw.trim_end_matches(['\r', '\n']);
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}
