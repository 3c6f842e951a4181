//! Request orchestration
//!
//! [`Analyzer::analyze`] validates the text, runs every capability in
//! order and assembles the response. It never fails: blank input yields
//! [`AnalysisResponse::Rejected`], and every other input a complete
//! [`AnalysisResult`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::keywords::extract_keywords;
use crate::language::{LanguageDetector, ProfileRegistry, WhatlangDetector};
use crate::sentiment::{round_polarity, LexiconSentiment, SentimentLabel, SentimentModel};
use crate::stats::TextStats;
use crate::summarize::Summarizer;

/// Error message returned for blank input
pub const EMPTY_TEXT_ERROR: &str = "Text cannot be empty";

/// Analysis of one non-blank text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Language code, or `"unknown"`
    pub language: String,
    pub sentiment: SentimentLabel,
    /// Polarity rounded to three decimals
    pub polarity_score: f64,
    pub word_count: usize,
    pub character_count: usize,
    /// Most frequent words, most frequent first
    pub keywords: Vec<String>,
    pub summary: String,
}

/// What the analyzer returns for a request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Completed(AnalysisResult),
    /// Input failed validation; serializes as `{"error": ...}`
    Rejected { error: String },
}

impl AnalysisResponse {
    fn empty_text() -> Self {
        AnalysisResponse::Rejected {
            error: EMPTY_TEXT_ERROR.to_string(),
        }
    }

    /// The result, if the request was not rejected
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisResponse::Completed(result) => Some(result),
            AnalysisResponse::Rejected { .. } => None,
        }
    }
}

/// Liveness payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub version: String,
}

impl HealthStatus {
    /// Always reports `"ok"`
    pub fn ok(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "ok",
            service: service.into(),
            version: version.into(),
        }
    }
}

/// Text analysis orchestrator
///
/// Immutable once built; share it across threads behind an `Arc`.
pub struct Analyzer {
    config: AnalyzerConfig,
    detector: Arc<dyn LanguageDetector>,
    sentiment: Arc<dyn SentimentModel>,
    summarizer: Summarizer,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("summarizer", &self.summarizer)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Analyzer with default configuration and built-in models
    pub fn new() -> Self {
        AnalyzerBuilder::new().build()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Language profiles available to the statistical summarizer
    pub fn profiles(&self) -> &ProfileRegistry {
        self.summarizer.profiles()
    }

    /// Analyze `text`
    pub fn analyze(&self, text: &str) -> AnalysisResponse {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("Rejecting blank text");
            return AnalysisResponse::empty_text();
        }

        let language = self.detector.detect(text);
        log::debug!("Detected language: {language}");

        let polarity_score = round_polarity(self.sentiment.polarity(text));
        let sentiment = SentimentLabel::from_polarity(polarity_score);
        log::debug!("Sentiment: {sentiment} ({polarity_score})");

        let keywords = extract_keywords(text, self.config.keyword_count());
        let stats = TextStats::compute(text);

        let summary = self.summarizer.summarize(text, &language);

        log::info!(
            "Analyzed {} words (avg length {:.2}), language={}, sentiment={}, summary={}",
            stats.word_count,
            stats.avg_word_length,
            language,
            sentiment,
            summary.origin.as_str()
        );

        AnalysisResponse::Completed(AnalysisResult {
            language: language.code().to_string(),
            sentiment,
            polarity_score,
            word_count: stats.word_count,
            character_count: stats.character_count,
            keywords,
            summary: summary.text,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Analyzer`]; every part has a default
#[derive(Default)]
pub struct AnalyzerBuilder {
    config: Option<AnalyzerConfig>,
    profiles: Option<ProfileRegistry>,
    detector: Option<Arc<dyn LanguageDetector>>,
    sentiment: Option<Arc<dyn SentimentModel>>,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Language profiles for the statistical summarizer
    pub fn profiles(mut self, profiles: ProfileRegistry) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Some(Arc::new(detector));
        self
    }

    pub fn sentiment(mut self, model: impl SentimentModel + 'static) -> Self {
        self.sentiment = Some(Arc::new(model));
        self
    }

    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();
        let profiles = Arc::new(self.profiles.unwrap_or_else(ProfileRegistry::builtin));
        let detector = self.detector.unwrap_or_else(|| {
            Arc::new(WhatlangDetector::with_min_confidence(
                config.min_language_confidence(),
            ))
        });
        let sentiment = self
            .sentiment
            .unwrap_or_else(|| Arc::new(LexiconSentiment::english()));
        let summarizer = Summarizer::with_config(profiles, &config);

        Analyzer {
            config,
            detector,
            sentiment,
            summarizer,
        }
    }
}
