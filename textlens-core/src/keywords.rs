//! Frequency-based keyword extraction

use std::collections::HashMap;

use crate::text::lowercase_words;

/// Keywords returned when the caller does not ask for a specific count
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Return the `n` most frequent lowercase word tokens of `text`.
///
/// Ties keep first-encountered order. The result never contains
/// duplicates and is empty for text without word characters.
pub fn extract_keywords(text: &str, n: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in lowercase_words(text) {
        match index.get(&word) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable: equal counts stay in insertion order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(word, _)| word).collect()
}
