//! The provider abstraction: one minimal PDF-reading capability surface,
//! implemented by each wrapped external crate.
//!
//! Providers are registered at compile time and resolved once at startup.
//! Everything downstream of [`resolve`] is polymorphic over [`Provider`];
//! nothing else in the program branches on which crate does the reading.

use crate::error::ExtractError;

/// A compiled-in wrapper over an external PDF-reading crate.
pub trait Provider: Sync {
    /// Stable name of the provider, as used by `--provider`.
    fn name(&self) -> &'static str;

    /// Open a document from its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Parse`] if the bytes are not a readable PDF.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PageReader>, ExtractError>;
}

/// A provider-produced handle over one opened document.
pub trait PageReader {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the plain text of the page at `index` (0-indexed).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Extraction`] if the page's text cannot be
    /// pulled out, including when `index` is out of range.
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;
}

/// Iterator over the pages of an opened document, in document order.
///
/// Each call to [`next()`](Iterator::next) extracts one page's text. The
/// sequence is finite and not restartable; iterate it exactly once.
pub struct Pages<'a> {
    reader: &'a dyn PageReader,
    current: usize,
    count: usize,
}

impl<'a> Pages<'a> {
    /// Create an iterator over all pages of `reader`.
    pub fn new(reader: &'a dyn PageReader) -> Self {
        Self {
            reader,
            current: 0,
            count: reader.page_count(),
        }
    }
}

impl Iterator for Pages<'_> {
    type Item = Result<String, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.count {
            return None;
        }
        let result = self.reader.page_text(self.current);
        self.current += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

#[cfg(all(feature = "pdf-extract", feature = "lopdf"))]
const PROVIDERS: &[&dyn Provider] = &[&crate::providers::PdfExtract, &crate::providers::Lopdf];
#[cfg(all(feature = "pdf-extract", not(feature = "lopdf")))]
const PROVIDERS: &[&dyn Provider] = &[&crate::providers::PdfExtract];
#[cfg(all(not(feature = "pdf-extract"), feature = "lopdf"))]
const PROVIDERS: &[&dyn Provider] = &[&crate::providers::Lopdf];
#[cfg(not(any(feature = "pdf-extract", feature = "lopdf")))]
const PROVIDERS: &[&dyn Provider] = &[];

/// The compiled-in providers, in preference order.
///
/// `pdf-extract` comes first, `lopdf` second; a build without either feature
/// yields an empty list.
pub fn providers() -> &'static [&'static dyn Provider] {
    PROVIDERS
}

/// Resolve the preferred provider.
///
/// # Errors
///
/// Returns [`ExtractError::NoProvider`] if no provider feature is compiled in.
pub fn resolve() -> Result<&'static dyn Provider, ExtractError> {
    resolve_from(providers())
}

/// Resolve a provider by name, bypassing the fallback order.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownProvider`] if no compiled-in provider has
/// that name.
pub fn resolve_named(name: &str) -> Result<&'static dyn Provider, ExtractError> {
    providers()
        .iter()
        .copied()
        .find(|p| p.name() == name)
        .ok_or_else(|| ExtractError::UnknownProvider(name.to_string()))
}

fn resolve_from(
    list: &'static [&'static dyn Provider],
) -> Result<&'static dyn Provider, ExtractError> {
    list.first().copied().ok_or(ExtractError::NoProvider)
}
