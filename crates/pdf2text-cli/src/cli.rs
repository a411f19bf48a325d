use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Print the extracted text of a PDF document to standard output.
#[derive(Debug, Parser)]
#[command(name = "pdf2text", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Force a specific provider instead of the default fallback order
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for extracted text.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain concatenated page text
    Text,
    /// One JSON object per page
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_file_argument() {
        let cli = Cli::parse_from(["pdf2text", "test.pdf"]);
        assert_eq!(cli.file, PathBuf::from("test.pdf"));
        assert!(cli.provider.is_none());
    }

    #[test]
    fn parse_with_provider() {
        let cli = Cli::parse_from(["pdf2text", "test.pdf", "--provider", "lopdf"]);
        assert_eq!(cli.provider.as_deref(), Some("lopdf"));
    }

    #[test]
    fn default_format_is_text() {
        let cli = Cli::parse_from(["pdf2text", "test.pdf"]);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::parse_from(["pdf2text", "test.pdf", "--format", "json"]);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn file_argument_is_required() {
        assert!(Cli::try_parse_from(["pdf2text"]).is_err());
    }
}
