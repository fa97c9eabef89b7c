//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use readability_core::Report;
use std::io::Write;

/// Plain text formatter - statistics block followed by one line per score
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, text: Option<&str>, report: &Report) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "{source}")?;
        if let Some(text) = text {
            writeln!(self.writer, "The text is:")?;
            writeln!(self.writer, "{text}")?;
            writeln!(self.writer)?;
        }

        let stats = &report.statistics;
        writeln!(self.writer, "Words: {}", stats.words)?;
        writeln!(self.writer, "Sentences: {}", stats.sentences)?;
        writeln!(self.writer, "Characters: {}", stats.characters)?;
        writeln!(self.writer, "Syllables: {}", stats.syllables)?;
        writeln!(self.writer, "Polysyllables: {}", stats.polysyllables)?;
        writeln!(self.writer)?;

        for result in &report.scores {
            writeln!(self.writer, "{result}")?;
        }

        if let Some(average) = report.average_age {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "This text should be understood in average by {average:.2} year olds."
            )?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
