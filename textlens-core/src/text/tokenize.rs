//! Word tokenization
//!
//! A word token is a maximal run of Unicode word characters (letters,
//! digits, underscore). Punctuation and whitespace separate tokens.

use regex::Regex;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("static word pattern is valid"))
}

/// Iterate over word tokens in `text`, preserving case
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(text).map(|m| m.as_str())
}

/// Lowercase `text` and return its word tokens
pub fn lowercase_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_tokens(&lowered).map(str::to_owned).collect()
}
