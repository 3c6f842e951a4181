//! Language identification and per-language summarization data
//!
//! - [`detect`]: the [`LanguageDetector`] seam and its `whatlang` backend
//! - [`profile`]: TOML schema and runtime form of a language profile
//! - [`loader`]: embedded profiles and the [`ProfileRegistry`]

pub mod detect;
pub mod loader;
pub mod profile;

pub use detect::{Detection, LanguageDetector, WhatlangDetector, UNKNOWN_LANGUAGE};
pub use loader::{builtin_profiles, ProfileRegistry};
pub use profile::{LanguageProfile, ProfileConfig};
