//! Provider backed by the `lopdf` crate.

use lopdf::Document;

use crate::error::ExtractError;
use crate::provider::{PageReader, Provider};

/// The `lopdf` provider. Second in the fallback order.
pub struct Lopdf;

impl Provider for Lopdf {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PageReader>, ExtractError> {
        let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        Ok(Box::new(LopdfReader { doc, page_numbers }))
    }
}

struct LopdfReader {
    doc: Document,
    /// Page numbers in document order, as reported by the page tree.
    page_numbers: Vec<u32>,
}

impl PageReader for LopdfReader {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let number =
            self.page_numbers
                .get(index)
                .copied()
                .ok_or_else(|| ExtractError::Extraction {
                    page: index,
                    message: "page index out of range".to_string(),
                })?;
        let mut text = self
            .doc
            .extract_text(&[number])
            .map_err(|e| ExtractError::Extraction {
                page: index,
                message: e.to_string(),
            })?;
        // lopdf terminates each page with a newline of its own; the caller
        // appends the per-page separator.
        if text.ends_with('\n') {
            text.pop();
        }
        Ok(text)
    }
}
