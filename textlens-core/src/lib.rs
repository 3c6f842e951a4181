//! Text analysis pipeline: language, sentiment, keywords, statistics and
//! extractive summaries.
//!
//! Each capability sits behind its own module so the orchestrator in
//! [`analysis`] only sequences calls and assembles the response:
//!
//! - **Language detection**: [`language::detect`], backed by `whatlang`
//! - **Sentiment**: [`sentiment`], a lexicon polarity model
//! - **Keywords and statistics**: [`keywords`], [`stats`]
//! - **Summaries**: [`summarize`], a statistical LSA stage with a
//!   heuristic fallback chain
//!
//! # Example
//!
//! ```rust
//! use textlens_core::{AnalysisResponse, Analyzer};
//!
//! let analyzer = Analyzer::new();
//! let response = analyzer.analyze("Cats are great. Dogs are too.");
//!
//! match response {
//!     AnalysisResponse::Completed(result) => {
//!         assert_eq!(result.word_count, 6);
//!         assert!(!result.summary.is_empty());
//!     }
//!     AnalysisResponse::Rejected { .. } => unreachable!(),
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod keywords;
pub mod language;
pub mod sentiment;
pub mod stats;
pub mod summarize;
pub mod text;

pub use analysis::{
    AnalysisResponse, AnalysisResult, Analyzer, AnalyzerBuilder, HealthStatus, EMPTY_TEXT_ERROR,
};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use error::{Error, Result};
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT};
pub use language::{Detection, LanguageDetector, LanguageProfile, ProfileRegistry, WhatlangDetector};
pub use sentiment::{LexiconSentiment, SentimentLabel, SentimentModel};
pub use stats::TextStats;
pub use summarize::{FallbackReason, StageOutcome, Summary, SummaryOrigin, Summarizer};

/// Compiles the README examples as doctests
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
