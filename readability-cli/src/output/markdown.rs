//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use readability_core::Report;
use std::io::Write;

/// Markdown formatter - a section with two tables per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, text: Option<&str>, report: &Report) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        if let Some(text) = text {
            for line in text.lines() {
                writeln!(self.writer, "> {line}")?;
            }
            writeln!(self.writer)?;
        }

        let stats = &report.statistics;
        writeln!(self.writer, "| Statistic | Count |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Words | {} |", stats.words)?;
        writeln!(self.writer, "| Sentences | {} |", stats.sentences)?;
        writeln!(self.writer, "| Characters | {} |", stats.characters)?;
        writeln!(self.writer, "| Syllables | {} |", stats.syllables)?;
        writeln!(self.writer, "| Polysyllables | {} |", stats.polysyllables)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "| Formula | Score | Age |")?;
        writeln!(self.writer, "|---|---|---|")?;
        for result in &report.scores {
            writeln!(
                self.writer,
                "| {} | {:.2} | {} |",
                result.formula.name(),
                result.score,
                result.age_label()
            )?;
        }
        writeln!(self.writer)?;

        if let Some(average) = report.average_age {
            writeln!(self.writer, "**Average age:** {average:.2}")?;
            writeln!(self.writer)?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
