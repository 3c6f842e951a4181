//! Basic text statistics

use serde::Serialize;

/// Word and character counts for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStats {
    /// Number of whitespace-delimited tokens
    pub word_count: usize,
    /// Number of characters (Unicode scalar values)
    pub character_count: usize,
    /// Mean character length of the whitespace-delimited tokens
    pub avg_word_length: f64,
}

impl TextStats {
    /// Compute statistics for `text` as given.
    ///
    /// Callers that want counts for stripped text strip it first.
    pub fn compute(text: &str) -> Self {
        let (word_count, letters) = text
            .split_whitespace()
            .fold((0usize, 0usize), |(words, chars), word| {
                (words + 1, chars + word.chars().count())
            });

        let avg_word_length = if word_count > 0 {
            letters as f64 / word_count as f64
        } else {
            0.0
        };

        Self {
            word_count,
            character_count: text.chars().count(),
            avg_word_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let stats = TextStats::compute("Hello big world");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.character_count, 15);
        assert!((stats.avg_word_length - 13.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_punctuation_counts_toward_word_length() {
        let stats = TextStats::compute("Hi, you!");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.avg_word_length, 3.5);
    }

    #[test]
    fn test_multibyte_characters() {
        let stats = TextStats::compute("日本語 テキスト");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.character_count, 8);
        assert_eq!(stats.avg_word_length, 3.5);
    }

    #[test]
    fn test_empty_text_guards_division() {
        let stats = TextStats::compute("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.character_count, 0);
        assert_eq!(stats.avg_word_length, 0.0);
    }

    #[test]
    fn test_mixed_whitespace() {
        let stats = TextStats::compute("a\tb\nc  d");
        assert_eq!(stats.word_count, 4);
    }
}
