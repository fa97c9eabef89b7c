//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use readability_core::Report;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs reports as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Source file of the analyzed text
    pub file: String,
    /// The analyzed text, when echoing is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Statistics, scores and average age
    #[serde(flatten)]
    pub report: Report,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, text: Option<&str>, report: &Report) -> Result<()> {
        self.documents.push(DocumentReport {
            file: source.to_string(),
            text: text.map(str::to_string),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
