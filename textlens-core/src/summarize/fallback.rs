//! Heuristic summary fallback
//!
//! Sentences are split after `.`, `!` or `?` followed by whitespace, then:
//!
//! | sentences | summary                                                  |
//! |-----------|----------------------------------------------------------|
//! | 0–2       | the text unchanged                                       |
//! | 3–5       | the first two sentences                                  |
//! | 6+        | the first two sentences containing a top-3 keyword,      |
//! |           | or the first sentence if none does                       |
//!
//! Keyword matching is a case-insensitive substring test, so a short
//! keyword such as `a` matches any sentence containing that letter.

use super::{Summary, SummaryOrigin};
use crate::keywords::extract_keywords;
use crate::text::split_sentences;

/// Texts with at most this many sentences are returned unchanged
const WHOLE_TEXT_MAX: usize = 2;
/// Texts with at most this many sentences return their leading sentences
const LEADING_MAX: usize = 5;
/// Sentences kept in a fallback summary
const SUMMARY_SENTENCES: usize = 2;
/// Keywords used to pick sentences from long texts
const SELECTION_KEYWORDS: usize = 3;

/// Summarize `text` without any statistical model
pub fn fallback_summary(text: &str) -> Summary {
    let sentences = split_sentences(text);

    if sentences.len() <= WHOLE_TEXT_MAX {
        return Summary::new(text, SummaryOrigin::WholeText);
    }

    if sentences.len() <= LEADING_MAX {
        return Summary::new(
            sentences[..SUMMARY_SENTENCES].join(" "),
            SummaryOrigin::LeadingSentences,
        );
    }

    let keywords = extract_keywords(text, SELECTION_KEYWORDS);
    keyword_summary(&sentences, &keywords)
}

fn keyword_summary(sentences: &[&str], keywords: &[String]) -> Summary {
    match select_by_keywords(sentences, keywords) {
        Some(selected) => Summary::new(selected, SummaryOrigin::KeywordSentences),
        None => Summary::new(
            sentences.first().copied().unwrap_or_default(),
            SummaryOrigin::FirstSentence,
        ),
    }
}

/// Join the first two sentences that contain any of `keywords`.
///
/// `keywords` are expected in lowercase. Returns `None` when no sentence
/// matches.
pub fn select_by_keywords(sentences: &[&str], keywords: &[String]) -> Option<String> {
    let selected: Vec<&str> = sentences
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            keywords.iter().any(|k| lowered.contains(k.as_str()))
        })
        .take(SUMMARY_SENTENCES)
        .copied()
        .collect();

    if selected.is_empty() {
        None
    } else {
        Some(selected.join(" "))
    }
}
