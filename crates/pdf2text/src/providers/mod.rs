//! The wrapped external PDF-reading crates, one module per provider.

#[cfg(feature = "lopdf")]
mod lopdf;
#[cfg(feature = "pdf-extract")]
mod pdf_extract;

#[cfg(feature = "lopdf")]
pub use lopdf::Lopdf;
#[cfg(feature = "pdf-extract")]
pub use pdf_extract::PdfExtract;
