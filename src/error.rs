//! Error types for pdftext.
//!
//! `PdfError` covers faults raised while reading a document. `ExtractError`
//! is what the binary reports to the user; its `Display` output is the exact
//! line written to stderr.

use std::io;
use thiserror::Error;

/// A fault raised by the PDF backend while opening or reading a document.
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("{0}")]
    Load(#[from] lopdf::Error),

    #[error("page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: lopdf::Error,
    },
}

/// Top-level failure of one invocation.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Error: No PDF file provided")]
    Usage,

    #[error("{0}")]
    Arguments(String),

    #[error("Error processing PDF: {0}")]
    Processing(#[from] PdfError),

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ExtractError {
    /// Process exit status for this failure. Every failure kind maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
