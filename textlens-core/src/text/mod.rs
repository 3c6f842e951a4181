//! Shared text splitting primitives

pub mod sentences;
pub mod tokenize;

pub use sentences::split_sentences;
pub use tokenize::{lowercase_words, word_tokens};
