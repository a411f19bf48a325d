//! The extraction routine: open, walk the page sequence once, accumulate.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::provider::{Pages, Provider, resolve};

/// Extract the text of the PDF at `path` using the preferred provider.
///
/// Provider resolution happens before the file is touched, so a build with
/// no provider reports [`ExtractError::NoProvider`] without attempting I/O.
///
/// # Errors
///
/// Returns [`ExtractError`] if no provider is compiled in, the file cannot
/// be read, or the provider fails to open the document or extract a page.
pub fn extract_file(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let provider = resolve()?;
    extract_path_with(provider, path)
}

/// Extract the text of the PDF at `path` using the given provider.
pub fn extract_path_with(
    provider: &dyn Provider,
    path: impl AsRef<Path>,
) -> Result<String, ExtractError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| ExtractError::Io(format!("{}: {e}", path.display())))?;
    extract_with(provider, &bytes)
}

/// Extract the text of a PDF from its raw bytes using the given provider.
///
/// The result is the concatenation of every page's text in document order,
/// each followed by a single `'\n'`. A 0-page document yields an empty
/// string.
pub fn extract_with(provider: &dyn Provider, bytes: &[u8]) -> Result<String, ExtractError> {
    let reader = provider.open(bytes)?;
    let mut text = String::new();
    for page in Pages::new(reader.as_ref()) {
        text.push_str(&page?);
        text.push('\n');
    }
    Ok(text)
}
