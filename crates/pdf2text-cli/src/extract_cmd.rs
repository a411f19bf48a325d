use std::fs;
use std::path::Path;

use pdf2text::{ExtractError, Pages, Provider, extract_path_with, resolve, resolve_named};

use crate::cli::OutputFormat;

/// Diagnostic printed to stdout when no PDF provider is compiled in.
///
/// Kept verbatim from the tool this replaces, with the provider names
/// updated; goes to stdout rather than stderr, as before.
pub const MISSING_PROVIDER_MSG: &str = "Потрібно встановити pdf-extract або lopdf";

pub fn run(file: &Path, provider: Option<&str>, format: &OutputFormat) -> Result<(), i32> {
    let provider = resolve_provider(provider)?;

    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    match format {
        OutputFormat::Text => {
            let text = extract_path_with(provider, file).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
            print!("{text}");
        }
        OutputFormat::Json => {
            let bytes = fs::read(file).map_err(|e| {
                eprintln!("Error: {}: {e}", file.display());
                1
            })?;
            let reader = provider.open(&bytes).map_err(|e| {
                eprintln!("Error: {e}");
                1
            })?;
            for (i, page) in Pages::new(reader.as_ref()).enumerate() {
                let text = page.map_err(|e| {
                    eprintln!("Error: {e}");
                    1
                })?;
                let obj = serde_json::json!({
                    "page": i + 1,
                    "text": text,
                });
                println!("{}", serde_json::to_string(&obj).unwrap());
            }
        }
    }

    Ok(())
}

/// Resolve a provider: the named one if `--provider` was given, otherwise
/// the first compiled-in provider in fallback order.
///
/// A build with no providers at all reports the fixed diagnostic on stdout,
/// matching the behavior this tool replaces.
fn resolve_provider(name: Option<&str>) -> Result<&'static dyn Provider, i32> {
    match name {
        Some(name) => resolve_named(name).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => resolve().map_err(|e| {
            match e {
                ExtractError::NoProvider => println!("{MISSING_PROVIDER_MSG}"),
                _ => eprintln!("Error: {e}"),
            }
            1
        }),
    }
}
