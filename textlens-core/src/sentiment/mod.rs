//! Sentiment polarity scoring and labelling
//!
//! A [`SentimentModel`] produces a polarity in `[-1.0, 1.0]`. The labelling
//! policy on top of it is fixed: above `0.1` is positive, below `-0.1`
//! is negative, anything else neutral.

mod lexicon;

pub use lexicon::{Lexicon, LexiconSentiment};

use serde::Serialize;
use std::fmt;

/// Polarity above which text is labelled positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity below which text is labelled negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Scores the polarity of a text
pub trait SentimentModel: Send + Sync {
    /// Polarity in `[-1.0, 1.0]`; negative values mean negative sentiment
    fn polarity(&self, text: &str) -> f64;
}

/// Three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity score
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round a polarity to three decimal places
pub fn round_polarity(polarity: f64) -> f64 {
    (polarity * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(SentimentLabel::from_polarity(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.101), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.101), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_round_polarity() {
        assert_eq!(round_polarity(0.123456), 0.123);
        assert_eq!(round_polarity(-0.98765), -0.988);
        assert_eq!(round_polarity(0.0), 0.0);
    }

    #[test]
    fn test_rounding_happens_before_labelling() {
        // 0.1004 rounds to 0.1, which is not above the threshold
        let rounded = round_polarity(0.1004);
        assert_eq!(SentimentLabel::from_polarity(rounded), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_serialization() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!(SentimentLabel::Negative.as_str(), "negative");
        assert_eq!(SentimentLabel::Neutral.as_str(), "neutral");
    }
}
