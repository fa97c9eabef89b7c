//! Output formatting module

use crate::commands::analyze::OutputFormat;
use anyhow::Result;
use readability_core::Report;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one document
    ///
    /// `text` is the analyzed text when it should be echoed.
    fn format_report(&mut self, source: &str, text: Option<&str>, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Create the formatter for an output format
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
