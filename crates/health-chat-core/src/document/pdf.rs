//! PDF text-layer extraction via pdf-extract.
//!
//! No layout awareness, no OCR: whatever the text layer yields is handed to
//! the line heuristic as-is.

use std::path::Path;

use super::{DocumentError, DocumentResult};

/// Extract the text layer of a PDF file on disk.
pub fn extract_text<P: AsRef<Path>>(path: P) -> DocumentResult<String> {
    let bytes = std::fs::read(path)?;
    extract_text_from_bytes(&bytes)
}

/// Extract the text layer from in-memory PDF bytes.
///
/// Returns [`DocumentError::NoText`] when the PDF decodes but carries no
/// text layer (typically a scan of images).
pub fn extract_text_from_bytes(bytes: &[u8]) -> DocumentResult<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::Decode(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(DocumentError::NoText);
    }

    Ok(text)
}
