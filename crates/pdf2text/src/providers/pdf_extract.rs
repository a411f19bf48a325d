//! Provider backed by the `pdf-extract` crate.
//!
//! `pdf-extract` only exposes whole-page output, so the entire document is
//! extracted eagerly when the reader is opened; `page_text` then serves from
//! the cached per-page strings.

use crate::error::ExtractError;
use crate::provider::{PageReader, Provider};

/// The `pdf-extract` provider. Preferred when compiled in.
pub struct PdfExtract;

impl Provider for PdfExtract {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PageReader>, ExtractError> {
        let pages = ::pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        Ok(Box::new(PdfExtractReader { pages }))
    }
}

struct PdfExtractReader {
    pages: Vec<String>,
}

impl PageReader for PdfExtractReader {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| ExtractError::Extraction {
                page: index,
                message: "page index out of range".to_string(),
            })
    }
}
