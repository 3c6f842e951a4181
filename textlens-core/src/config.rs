//! Configuration for the analysis pipeline

use crate::error::Error;

/// Default configuration constants
pub mod defaults {
    /// Number of keywords returned per request
    pub const KEYWORD_COUNT: usize = crate::keywords::DEFAULT_KEYWORD_COUNT;

    /// Sentences extracted by the statistical summarizer
    pub const SUMMARY_SENTENCES: usize = 2;

    /// Share of singular values kept when ranking sentences
    pub const REDUCTION_RATIO: f64 = 1.0;

    /// Minimum detector confidence before a language code is reported
    pub const MIN_LANGUAGE_CONFIDENCE: f64 = 0.0;

    /// Longest text, in sentences, handed to the statistical summarizer
    pub const MAX_STATISTICAL_SENTENCES: usize = 200;
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub(crate) keyword_count: usize,
    pub(crate) summary_sentences: usize,
    pub(crate) statistical_summary: bool,
    pub(crate) reduction_ratio: f64,
    pub(crate) min_language_confidence: f64,
    pub(crate) max_statistical_sentences: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keyword_count: defaults::KEYWORD_COUNT,
            summary_sentences: defaults::SUMMARY_SENTENCES,
            statistical_summary: true,
            reduction_ratio: defaults::REDUCTION_RATIO,
            min_language_confidence: defaults::MIN_LANGUAGE_CONFIDENCE,
            max_statistical_sentences: defaults::MAX_STATISTICAL_SENTENCES,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Number of keywords returned per request
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// Sentences requested from the statistical summarizer
    pub fn summary_sentences(&self) -> usize {
        self.summary_sentences
    }

    /// Whether the statistical stage runs before the heuristic fallback
    pub fn statistical_summary(&self) -> bool {
        self.statistical_summary
    }

    pub fn reduction_ratio(&self) -> f64 {
        self.reduction_ratio
    }

    pub fn min_language_confidence(&self) -> f64 {
        self.min_language_confidence
    }

    /// Texts with more sentences skip straight to the heuristic fallback
    pub fn max_statistical_sentences(&self) -> usize {
        self.max_statistical_sentences
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.keyword_count == 0 {
            return Err(Error::Configuration(
                "keyword_count must be greater than 0".into(),
            ));
        }

        if self.summary_sentences == 0 {
            return Err(Error::Configuration(
                "summary_sentences must be greater than 0".into(),
            ));
        }

        if !(self.reduction_ratio > 0.0 && self.reduction_ratio <= 1.0) {
            return Err(Error::Configuration(format!(
                "reduction_ratio must be in (0, 1], got {}",
                self.reduction_ratio
            )));
        }

        if self.max_statistical_sentences == 0 {
            return Err(Error::Configuration(
                "max_statistical_sentences must be greater than 0".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.min_language_confidence) {
            return Err(Error::Configuration(format!(
                "min_language_confidence must be in [0, 1], got {}",
                self.min_language_confidence
            )));
        }

        Ok(())
    }
}

/// Fluent builder for [`AnalyzerConfig`]
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    keyword_count: Option<usize>,
    summary_sentences: Option<usize>,
    statistical_summary: Option<bool>,
    reduction_ratio: Option<f64>,
    min_language_confidence: Option<f64>,
    max_statistical_sentences: Option<usize>,
}

impl AnalyzerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of keywords to return
    pub fn keyword_count(mut self, count: usize) -> Self {
        self.keyword_count = Some(count);
        self
    }

    /// Set the number of sentences the statistical stage extracts
    pub fn summary_sentences(mut self, count: usize) -> Self {
        self.summary_sentences = Some(count);
        self
    }

    /// Enable or disable the statistical summarization stage
    pub fn statistical_summary(mut self, enabled: bool) -> Self {
        self.statistical_summary = Some(enabled);
        self
    }

    /// Set the share of singular values used for sentence ranking
    pub fn reduction_ratio(mut self, ratio: f64) -> Self {
        self.reduction_ratio = Some(ratio);
        self
    }

    /// Set the minimum language detection confidence
    pub fn min_language_confidence(mut self, confidence: f64) -> Self {
        self.min_language_confidence = Some(confidence);
        self
    }

    /// Set the sentence limit of the statistical stage
    pub fn max_statistical_sentences(mut self, count: usize) -> Self {
        self.max_statistical_sentences = Some(count);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig, Error> {
        let mut config = AnalyzerConfig::default();

        if let Some(count) = self.keyword_count {
            config.keyword_count = count;
        }

        if let Some(count) = self.summary_sentences {
            config.summary_sentences = count;
        }

        if let Some(enabled) = self.statistical_summary {
            config.statistical_summary = enabled;
        }

        if let Some(ratio) = self.reduction_ratio {
            config.reduction_ratio = ratio;
        }

        if let Some(confidence) = self.min_language_confidence {
            config.min_language_confidence = confidence;
        }

        if let Some(count) = self.max_statistical_sentences {
            config.max_statistical_sentences = count;
        }

        config.validate()?;
        Ok(config)
    }
}
