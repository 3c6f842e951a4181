//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use textlens_core::AnalysisResponse;

/// Writes the response as JSON
///
/// A single input is written as the bare response object, the same shape
/// `POST /analyze_text` returns. Several inputs become an array of objects
/// carrying a `source` field.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<Report>,
}

#[derive(Debug, Serialize)]
struct Report {
    source: String,
    #[serde(flatten)]
    response: AnalysisResponse,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, response: &AnalysisResponse) -> Result<()> {
        self.reports.push(Report {
            source: source.to_string(),
            response: response.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let reports = std::mem::take(&mut self.reports);
        match reports.as_slice() {
            [single] => self.write_value(&single.response)?,
            many => self.write_value(&many)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
