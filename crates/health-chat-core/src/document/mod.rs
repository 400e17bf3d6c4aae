//! Document text decoding.
//!
//! Turns an uploaded report file into the raw text the extractor consumes.
//! Decode failures (unreadable file, corrupt or password-protected PDF,
//! image-only scan) are surfaced as distinct error kinds so callers can keep
//! them apart from the "decoded fine, nothing matched" outcome.

mod pdf;

pub use pdf::*;

use thiserror::Error;

/// Document decoding errors.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PDF: {0}")]
    Decode(String),

    #[error("Document has no extractable text layer")]
    NoText,
}

pub type DocumentResult<T> = Result<T, DocumentError>;
