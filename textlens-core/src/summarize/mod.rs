//! Extractive summarization
//!
//! Summaries come from an explicit two-stage pipeline:
//!
//! 1. **Statistical stage** ([`LsaSummarizer`]): latent semantic analysis
//!    over the sentences, using the language profile that matches the
//!    detected language. It reports a [`StageOutcome`] instead of failing:
//!    either a summary or the reason the next stage has to take over.
//! 2. **Heuristic fallback** ([`fallback`]): sentence-count based rules
//!    that always produce text for non-empty input.

pub mod fallback;
pub mod lsa;

pub use fallback::{fallback_summary, select_by_keywords};
pub use lsa::LsaSummarizer;

use std::fmt;
use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::language::{Detection, ProfileRegistry};

/// Why the statistical stage handed over to the fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The statistical stage is switched off in the configuration
    Disabled,
    /// No language profile exists for the detected language
    UnsupportedLanguage(String),
    /// No countable words remained after stop-word filtering
    NoContent,
    /// The statistical stage produced only whitespace
    Blank,
    /// The text exceeds the statistical stage's size limits
    TooLong,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Disabled => write!(f, "statistical summary disabled"),
            FallbackReason::UnsupportedLanguage(code) => {
                write!(f, "no language profile for '{code}'")
            }
            FallbackReason::NoContent => write!(f, "no content words"),
            FallbackReason::Blank => write!(f, "blank statistical summary"),
            FallbackReason::TooLong => write!(f, "text too long for statistical summary"),
        }
    }
}

/// Result of the statistical stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// A usable, non-blank summary
    Summary(String),
    /// The fallback stage must produce the summary
    NeedsFallback(FallbackReason),
}

/// Which rule produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOrigin {
    /// Latent semantic analysis
    Statistical,
    /// Two sentences or fewer: the text itself
    WholeText,
    /// Three to five sentences: the first two
    LeadingSentences,
    /// More than five sentences: the first two mentioning a top keyword
    KeywordSentences,
    /// No sentence mentioned a keyword: the first sentence
    FirstSentence,
}

impl SummaryOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryOrigin::Statistical => "statistical",
            SummaryOrigin::WholeText => "whole-text",
            SummaryOrigin::LeadingSentences => "leading-sentences",
            SummaryOrigin::KeywordSentences => "keyword-sentences",
            SummaryOrigin::FirstSentence => "first-sentence",
        }
    }
}

/// A summary together with the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub origin: SummaryOrigin,
}

impl Summary {
    pub(crate) fn new(text: impl Into<String>, origin: SummaryOrigin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }
}

/// Two-stage summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    profiles: Arc<ProfileRegistry>,
    lsa: LsaSummarizer,
    statistical: bool,
}

impl Summarizer {
    /// Summarizer with the built-in language profiles and default settings
    pub fn new() -> Self {
        Self::with_config(
            Arc::new(ProfileRegistry::builtin()),
            &AnalyzerConfig::default(),
        )
    }

    pub fn with_config(profiles: Arc<ProfileRegistry>, config: &AnalyzerConfig) -> Self {
        Self {
            profiles,
            lsa: LsaSummarizer::new(config.summary_sentences(), config.reduction_ratio())
                .with_max_sentences(config.max_statistical_sentences()),
            statistical: config.statistical_summary(),
        }
    }

    /// Profiles available to the statistical stage
    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }

    /// Run the statistical stage alone
    pub fn statistical_stage(&self, text: &str, language: &Detection) -> StageOutcome {
        if !self.statistical {
            return StageOutcome::NeedsFallback(FallbackReason::Disabled);
        }

        let profile = match language {
            Detection::Detected(code) => self.profiles.get(code),
            Detection::Unknown => None,
        };

        match profile {
            Some(profile) => self.lsa.summarize(text, &profile),
            None => StageOutcome::NeedsFallback(FallbackReason::UnsupportedLanguage(
                language.code().to_string(),
            )),
        }
    }

    /// Summarize `text`; never empty for non-empty input
    pub fn summarize(&self, text: &str, language: &Detection) -> Summary {
        match self.statistical_stage(text, language) {
            StageOutcome::Summary(summary) => Summary::new(summary, SummaryOrigin::Statistical),
            StageOutcome::NeedsFallback(reason) => {
                log::debug!("Falling back to heuristic summary: {reason}");
                fallback_summary(text)
            }
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}
