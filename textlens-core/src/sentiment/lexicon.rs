//! Lexicon-based polarity model
//!
//! Every lexicon word found in the text is one assessment. A directly
//! preceding intensifier scales it, a negator up to three tokens back
//! flips and dampens it (`* -0.5`). The polarity is the mean assessment.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Deserialize;

use super::SentimentModel;
use crate::error::{Error, Result};

/// How far back a negator still applies
const NEGATION_WINDOW: usize = 3;
/// Factor applied to a negated assessment
const NEGATION_FACTOR: f64 = -0.5;

static ENGLISH: OnceLock<Arc<Lexicon>> = OnceLock::new();
static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\w+(?:['’]\w+)*").expect("static token pattern is valid"))
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    negation: NegationSection,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    polarity: HashMap<String, f64>,
}

#[derive(Debug, Default, Deserialize)]
struct NegationSection {
    #[serde(default)]
    words: Vec<String>,
}

/// Word polarities, intensifier multipliers and negators
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Parse a lexicon from TOML text
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(toml_str).map_err(|e| {
            Error::Configuration(format!(
                "Failed to parse sentiment lexicon {source_name}: {e}"
            ))
        })?;

        if let Some((word, value)) = file
            .polarity
            .iter()
            .find(|(_, value)| !(-1.0..=1.0).contains(*value))
        {
            return Err(Error::Configuration(format!(
                "Polarity for '{word}' in {source_name} is outside [-1, 1]: {value}"
            )));
        }

        let lower = |map: HashMap<String, f64>| {
            map.into_iter()
                .map(|(word, value)| (word.to_lowercase(), value))
                .collect()
        };

        Ok(Self {
            polarity: lower(file.polarity),
            intensifiers: lower(file.intensifiers),
            negations: file
                .negation
                .words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
        })
    }

    /// The embedded English lexicon
    pub fn english() -> Arc<Lexicon> {
        let lexicon = ENGLISH.get_or_init(|| {
            let source = include_str!("../../configs/sentiment/english.toml");
            let lexicon = Lexicon::from_toml_str("english", source)
                .expect("embedded English lexicon is valid");
            Arc::new(lexicon)
        });
        Arc::clone(lexicon)
    }

    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't") || token.ends_with("n’t")
    }
}

/// [`SentimentModel`] scoring text against a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: Arc<Lexicon>,
}

impl LexiconSentiment {
    /// Model using the embedded English lexicon
    pub fn english() -> Self {
        Self {
            lexicon: Lexicon::english(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::english()
    }
}

impl SentimentModel for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = token_regex()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut assessments = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.polarity.get(*token) else {
                continue;
            };

            let mut score = base;
            if let Some(multiplier) = i
                .checked_sub(1)
                .and_then(|prev| self.lexicon.intensifiers.get(tokens[prev]))
            {
                score = (score * multiplier).clamp(-1.0, 1.0);
            }

            let negated =
                (1..=NEGATION_WINDOW).any(|k| i >= k && self.lexicon.is_negation(tokens[i - k]));
            if negated {
                score *= NEGATION_FACTOR;
            }

            assessments.push(score);
        }

        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
