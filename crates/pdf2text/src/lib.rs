//! pdf2text: print the plain text of a PDF document.
//!
//! All parsing and text extraction is delegated to an external PDF-reading
//! crate. Two such crates are wrapped as interchangeable providers behind one
//! trait, selected once at startup in preference order:
//!
//! 1. `pdf-extract`
//! 2. `lopdf`
//!
//! Each provider is gated by a Cargo feature of the same name; both are
//! enabled by default. A build with `--no-default-features` carries no
//! PDF-reading capability and [`resolve`] reports that as
//! [`ExtractError::NoProvider`].
//!
//! # Example
//!
//! ```ignore
//! let text = pdf2text::extract_file("report.pdf")?;
//! print!("{text}");
//! ```

mod error;
mod extract;
pub mod provider;
mod providers;
#[cfg(test)]
mod test_pdf;

pub use error::ExtractError;
pub use extract::{extract_file, extract_path_with, extract_with};
pub use provider::{PageReader, Pages, Provider, providers, resolve, resolve_named};
#[cfg(feature = "lopdf")]
pub use providers::Lopdf;
#[cfg(feature = "pdf-extract")]
pub use providers::PdfExtract;
