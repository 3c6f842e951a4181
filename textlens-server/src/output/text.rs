//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use textlens_core::AnalysisResponse;

/// Human-readable report, one block per input
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, response: &AnalysisResponse) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        self.written += 1;

        writeln!(self.writer, "== {source} ==")?;
        match response {
            AnalysisResponse::Completed(result) => {
                writeln!(self.writer, "Language:   {}", result.language)?;
                writeln!(
                    self.writer,
                    "Sentiment:  {} ({})",
                    result.sentiment, result.polarity_score
                )?;
                writeln!(self.writer, "Words:      {}", result.word_count)?;
                writeln!(self.writer, "Characters: {}", result.character_count)?;
                writeln!(self.writer, "Keywords:   {}", result.keywords.join(", "))?;
                writeln!(self.writer, "Summary:    {}", result.summary)?;
            }
            AnalysisResponse::Rejected { error } => {
                writeln!(self.writer, "Error: {error}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
