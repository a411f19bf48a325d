//! Error types for PDF text extraction.
//!
//! [`ExtractError`] covers the single handled condition (no provider
//! compiled in) and the propagated failures (I/O, unreadable documents,
//! per-page extraction errors).

use std::fmt;

/// Errors raised while resolving a provider or extracting text.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// No PDF-reading provider was compiled into this build.
    NoProvider,
    /// A provider was requested by name but is not compiled in.
    UnknownProvider(String),
    /// I/O error reading the document from disk.
    Io(String),
    /// The resolved provider could not open the document.
    Parse(String),
    /// Text extraction failed for a single page (0-indexed).
    Extraction {
        /// Index of the failing page.
        page: usize,
        /// Provider-reported failure description.
        message: String,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoProvider => write!(
                f,
                "no PDF provider compiled in (enable the pdf-extract or lopdf feature)"
            ),
            ExtractError::UnknownProvider(name) => write!(f, "unknown provider: {name}"),
            ExtractError::Io(msg) => write!(f, "I/O error: {msg}"),
            ExtractError::Parse(msg) => write!(f, "failed to open PDF: {msg}"),
            ExtractError::Extraction { page, message } => {
                write!(f, "failed to extract page {}: {message}", page + 1)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Io(err.to_string())
    }
}
