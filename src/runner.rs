use crate::error::{ExtractError, PdfError};
use crate::extract::extract_text;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Main entry point for one extraction.
///
/// Writes the `Processing PDF` and `File exists` diagnostics to `stderr`,
/// extracts the document and, on success only, writes the text followed by a
/// newline to `stdout`. The existence check is informational; the open
/// attempt decides whether the path is usable.
pub fn run<O: Write, E: Write>(
    path: &Path,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<(), ExtractError> {
    run_with(path, extract_text, stdout, stderr)
}

/// Same as [`run`] with the extraction step supplied by the caller.
pub fn run_with<F, O, E>(
    path: &Path,
    extract: F,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<(), ExtractError>
where
    F: FnOnce(&Path) -> Result<String, PdfError>,
    O: Write,
    E: Write,
{
    writeln!(stderr, "Processing PDF: {}", path.display())?;
    writeln!(stderr, "File exists: {}", path.exists())?;

    let text = extract(path)?;
    debug!(chars = text.chars().count(), "extraction complete");

    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}
