//! Sentence splitting
//!
//! Two flavours share one scanner:
//! - [`split_sentences`]: a boundary after `.`, `!` or `?` whenever
//!   whitespace follows. Used by the heuristic summary fallback.
//! - [`SplitRules::split`]: language-aware splitting with configurable
//!   terminators, abbreviation suppression and closing quotes/brackets
//!   kept with their sentence. Used by the statistical summarizer.

use std::collections::HashSet;

const DEFAULT_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Characters that stay attached to the sentence they close
const CLOSERS: [char; 8] = ['"', '\'', ')', ']', '}', '»', '”', '’'];

/// Split `text` after every `.`, `!` or `?` that is followed by whitespace.
///
/// The whitespace run between sentences is dropped; nothing else is
/// trimmed or rewritten, so joining the result with single spaces
/// reproduces single-spaced input exactly.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SplitRules::plain().split(text)
}

/// Rules for the sentence scanner
#[derive(Debug, Clone)]
pub struct SplitRules {
    terminators: Vec<char>,
    /// Lowercased abbreviations without their trailing dot
    abbreviations: HashSet<String>,
    absorb_closers: bool,
}

impl SplitRules {
    /// `.`, `!`, `?` with no abbreviations and no closer handling
    pub fn plain() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
            abbreviations: HashSet::new(),
            absorb_closers: false,
        }
    }

    /// Language-aware rules
    pub fn new<I, S>(terminators: Vec<char>, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terminators,
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
            absorb_closers: true,
        }
    }

    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Whether the word ending right before a dot is a known abbreviation
    fn ends_with_abbreviation(&self, before_dot: &str) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }
        let word = before_dot
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        !word.is_empty() && self.abbreviations.contains(&word.to_lowercase())
    }

    /// Split `text` into sentences
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !self.is_terminator(ch) {
                i += 1;
                continue;
            }

            let mut end = i + 1;
            if self.absorb_closers {
                while end < chars.len() && CLOSERS.contains(&chars[end].1) {
                    end += 1;
                }
            }

            let followed_by_space = end < chars.len() && chars[end].1.is_whitespace();
            let suppressed = ch == '.' && self.ends_with_abbreviation(&text[start..pos]);

            if followed_by_space && !suppressed {
                sentences.push(&text[start..chars[end].0]);
                while end < chars.len() && chars[end].1.is_whitespace() {
                    end += 1;
                }
                start = chars.get(end).map_or(text.len(), |&(p, _)| p);
                i = end;
            } else {
                i += 1;
            }
        }

        if start < text.len() {
            sentences.push(&text[start..]);
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        let sentences = split_sentences("Cats are great. Dogs are too! Are birds? Yes.");
        assert_eq!(
            sentences,
            vec!["Cats are great.", "Dogs are too!", "Are birds?", "Yes."]
        );
    }

    #[test]
    fn test_terminator_without_whitespace_does_not_split() {
        assert_eq!(
            split_sentences("Version 3.14 is out.Really"),
            vec!["Version 3.14 is out.Really"]
        );
    }

    #[test]
    fn test_whitespace_runs_are_dropped() {
        assert_eq!(
            split_sentences("One.   Two.\n\nThree."),
            vec!["One.", "Two.", "Three."]
        );
    }

    #[test]
    fn test_stacked_terminators() {
        assert_eq!(split_sentences("What?! No way."), vec!["What?!", "No way."]);
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(split_sentences("just some words"), vec!["just some words"]);
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn test_plain_split_ignores_abbreviations() {
        assert_eq!(
            split_sentences("Dr. Smith arrived."),
            vec!["Dr.", "Smith arrived."]
        );
    }

    #[test]
    fn test_rules_suppress_abbreviations() {
        let rules = SplitRules::new(vec!['.', '!', '?'], ["Dr", "e.g."]);
        assert_eq!(
            rules.split("Dr. Smith arrived. He was late, e.g. by an hour."),
            vec!["Dr. Smith arrived.", "He was late, e.g. by an hour."]
        );
    }

    #[test]
    fn test_rules_keep_closing_quotes() {
        let rules = SplitRules::new(vec!['.', '!', '?'], Vec::<String>::new());
        assert_eq!(
            rules.split("He said \"Stop.\" Then he left."),
            vec!["He said \"Stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_rules_custom_terminators() {
        let rules = SplitRules::new(vec!['.', '!', '?', '¡'], Vec::<String>::new());
        assert_eq!(rules.split("Hola. Adiós."), vec!["Hola.", "Adiós."]);
    }
}
