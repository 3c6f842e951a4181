//! Output formatting module

use anyhow::Result;
use textlens_core::AnalysisResponse;

/// Trait for report formatters
pub trait OutputFormatter {
    /// Record the analysis of one input
    fn format_report(&mut self, source: &str, response: &AnalysisResponse) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
