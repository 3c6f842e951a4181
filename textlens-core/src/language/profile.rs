//! Language profile schema and validation
//!
//! A profile carries what the statistical summarizer needs to treat a
//! language properly: sentence terminators, abbreviations that must not
//! end a sentence, stop words, and a stemming algorithm.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::sentences::SplitRules;

/// Root of a language profile TOML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub stemmer: StemmerConfig,
    pub terminators: Terminators,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    #[serde(default)]
    pub stopwords: Stopwords,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemmerConfig {
    /// Snowball algorithm name, or `"none"`
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminators {
    pub chars: Vec<char>,
}

/// Abbreviations grouped by arbitrary category names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stopwords {
    #[serde(default)]
    pub words: Vec<String>,
}

fn default_algorithm() -> String {
    "none".to_string()
}

fn parse_algorithm(name: &str) -> std::result::Result<Option<Algorithm>, String> {
    let algorithm = match name.to_lowercase().as_str() {
        "none" => return Ok(None),
        "arabic" => Algorithm::Arabic,
        "danish" => Algorithm::Danish,
        "dutch" => Algorithm::Dutch,
        "english" => Algorithm::English,
        "finnish" => Algorithm::Finnish,
        "french" => Algorithm::French,
        "german" => Algorithm::German,
        "greek" => Algorithm::Greek,
        "hungarian" => Algorithm::Hungarian,
        "italian" => Algorithm::Italian,
        "norwegian" => Algorithm::Norwegian,
        "portuguese" => Algorithm::Portuguese,
        "romanian" => Algorithm::Romanian,
        "russian" => Algorithm::Russian,
        "spanish" => Algorithm::Spanish,
        "swedish" => Algorithm::Swedish,
        "tamil" => Algorithm::Tamil,
        "turkish" => Algorithm::Turkish,
        other => return Err(format!("Unknown stemmer algorithm: {other}")),
    };
    Ok(Some(algorithm))
}

impl ProfileConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.terminators.chars.is_empty() {
            return Err("No terminator characters defined".to_string());
        }

        parse_algorithm(&self.stemmer.algorithm)?;
        Ok(())
    }
}

/// Runtime form of a validated profile
pub struct LanguageProfile {
    code: String,
    name: String,
    algorithm: String,
    stemmer: Option<Stemmer>,
    split_rules: SplitRules,
    stopwords: HashSet<String>,
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("stemmer", &self.algorithm)
            .field("stopwords", &self.stopwords.len())
            .finish()
    }
}

impl LanguageProfile {
    /// Build a profile from parsed configuration
    pub fn from_config(config: &ProfileConfig) -> std::result::Result<Self, String> {
        config.validate()?;

        let stemmer = parse_algorithm(&config.stemmer.algorithm)?.map(Stemmer::create);
        let abbreviations = config.abbreviations.categories.values().flatten();
        let split_rules = SplitRules::new(config.terminators.chars.clone(), abbreviations);

        Ok(Self {
            code: config.metadata.code.trim().to_lowercase(),
            name: config.metadata.name.clone(),
            algorithm: config.stemmer.algorithm.to_lowercase(),
            stemmer,
            split_rules,
            stopwords: config
                .stopwords
                .words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
        })
    }

    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(source_name: &str, toml_str: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidProfile {
            source_name: source_name.to_string(),
            reason,
        };
        let config: ProfileConfig = toml::from_str(toml_str).map_err(|e| invalid(e.to_string()))?;
        Self::from_config(&config).map_err(invalid)
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&path.display().to_string(), &content)
    }

    /// ISO 639-1 code (lowercase)
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stemmer algorithm name as configured
    pub fn stemmer_name(&self) -> &str {
        &self.algorithm
    }

    /// Split text into sentences with this language's rules
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_rules.split(text)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Stem a lowercase word; identity when no stemmer is configured
    pub fn stem(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word).into_owned(),
            None => word.to_string(),
        }
    }
}
