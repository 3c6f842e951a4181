//! Language identification

use std::fmt;

use whatlang::Lang;

/// Code reported when no language could be identified
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Outcome of language identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// A confident language code (ISO 639-1 where one exists)
    Detected(String),
    /// The detector could not produce a confident code
    Unknown,
}

impl Detection {
    /// The code to report, `"unknown"` for [`Detection::Unknown`]
    pub fn code(&self) -> &str {
        match self {
            Detection::Detected(code) => code,
            Detection::Unknown => UNKNOWN_LANGUAGE,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Detection::Detected(_))
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies the language of a text
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Detection;
}

/// [`LanguageDetector`] backed by `whatlang` trigram models
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report [`Detection::Unknown`] below this confidence
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        Self { min_confidence }
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Detection {
        match whatlang::detect(text) {
            Some(info) if info.confidence() >= self.min_confidence => {
                Detection::Detected(iso_639_1(info.lang()).to_string())
            }
            Some(info) => {
                log::debug!(
                    "Discarding low-confidence language guess {} ({:.3})",
                    info.lang().code(),
                    info.confidence()
                );
                Detection::Unknown
            }
            None => Detection::Unknown,
        }
    }
}

/// Two-letter code for common languages, whatlang's three-letter code otherwise
fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Deu => "de",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "no",
        Lang::Fin => "fi",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Bul => "bg",
        Lang::Ell => "el",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Ind => "id",
        other => other.code(),
    }
}
