//! Analyze command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use textlens_core::Analyzer;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Analyze this text instead of reading input files
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file supplying analysis settings and profiles
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The JSON payload served by `POST /analyze_text`
    Json,
    /// Human-readable report
    Text,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> ServerResult<()> {
        super::init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let stdout = io::stdout();
        self.run(stdout.lock())
    }

    /// Analyze every input and write the reports to `writer`
    pub fn run<W: Write>(&self, writer: W) -> Result<()> {
        let analyzer = ServerConfig::load(self.config.as_deref())?.build_analyzer()?;

        match self.format {
            OutputFormat::Json => self.report(&analyzer, JsonFormatter::new(writer, self.pretty)),
            OutputFormat::Text => self.report(&analyzer, TextFormatter::new(writer)),
        }
    }

    fn report<F: OutputFormatter>(&self, analyzer: &Analyzer, mut formatter: F) -> Result<()> {
        for (source, text) in self.inputs()? {
            log::info!("Analyzing {source}");
            formatter.format_report(&source, &analyzer.analyze(&text))?;
        }
        formatter.finish()
    }

    /// `(source name, text)` pairs in the order they are analyzed
    fn inputs(&self) -> Result<Vec<(String, String)>> {
        if let Some(text) = &self.text {
            return Ok(vec![("text".to_string(), text.clone())]);
        }

        let (stdin, patterns): (Vec<&String>, Vec<&String>) =
            self.input.iter().partition(|i| *i == STDIN_MARKER);

        let mut inputs = Vec::new();
        if !stdin.is_empty() {
            inputs.push(("stdin".to_string(), FileReader::read_stdin()?));
        }
        if !patterns.is_empty() {
            let patterns: Vec<String> = patterns.into_iter().cloned().collect();
            for path in resolve_patterns(&patterns)? {
                let text = FileReader::read_text(&path)?;
                inputs.push((path.display().to_string(), text));
            }
        }
        Ok(inputs)
    }
}
