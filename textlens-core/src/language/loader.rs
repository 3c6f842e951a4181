//! Language profile loader
//!
//! Manages embedded and file-based language profiles.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::profile::LanguageProfile;

/// Embedded language profiles, keyed by code
static EMBEDDED: OnceLock<HashMap<String, Arc<LanguageProfile>>> = OnceLock::new();

const EMBEDDED_SOURCES: [(&str, &str); 5] = [
    ("en", include_str!("../../configs/languages/english.toml")),
    ("de", include_str!("../../configs/languages/german.toml")),
    ("fr", include_str!("../../configs/languages/french.toml")),
    ("es", include_str!("../../configs/languages/spanish.toml")),
    ("it", include_str!("../../configs/languages/italian.toml")),
];

/// Built-in profiles, parsed on first access
pub fn builtin_profiles() -> &'static HashMap<String, Arc<LanguageProfile>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for (code, source) in EMBEDDED_SOURCES {
            match LanguageProfile::from_toml_str(code, source) {
                Ok(profile) => {
                    map.insert(profile.code().to_string(), Arc::new(profile));
                }
                Err(e) => {
                    log::warn!("Failed to load embedded {code} profile: {e}");
                }
            }
        }

        map
    })
}

/// Lookup table of language profiles by code or English name
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Arc<LanguageProfile>>,
}

impl ProfileRegistry {
    /// Registry with no profiles; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the embedded profiles
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for profile in builtin_profiles().values() {
            registry.insert(Arc::clone(profile));
        }
        registry
    }

    /// Built-in profiles plus the given profile files.
    ///
    /// A file profile replaces a built-in one with the same code.
    pub fn with_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut registry = Self::builtin();
        for path in paths {
            let profile = LanguageProfile::from_file(path.as_ref())?;
            log::info!(
                "Loaded language profile '{}' from {}",
                profile.code(),
                path.as_ref().display()
            );
            registry.register(profile);
        }
        Ok(registry)
    }

    /// Add or replace a profile
    pub fn register(&mut self, profile: LanguageProfile) {
        self.insert(Arc::new(profile));
    }

    fn insert(&mut self, profile: Arc<LanguageProfile>) {
        self.profiles
            .retain(|_, existing| existing.code() != profile.code());
        self.profiles
            .insert(profile.name().to_lowercase(), Arc::clone(&profile));
        self.profiles.insert(profile.code().to_string(), profile);
    }

    /// Look up a profile by code (`en`) or name (`english`)
    pub fn get(&self, code: &str) -> Option<Arc<LanguageProfile>> {
        self.profiles.get(&code.to_lowercase()).cloned()
    }

    /// Like [`get`](Self::get) but with an error for unknown codes
    pub fn require(&self, code: &str) -> Result<Arc<LanguageProfile>> {
        self.get(code)
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    /// Distinct profiles sorted by code
    pub fn profiles(&self) -> Vec<Arc<LanguageProfile>> {
        let mut seen: HashMap<&str, &Arc<LanguageProfile>> = HashMap::new();
        for profile in self.profiles.values() {
            seen.entry(profile.code()).or_insert(profile);
        }
        let mut profiles: Vec<_> = seen.into_values().cloned().collect();
        profiles.sort_by(|a, b| a.code().cmp(b.code()));
        profiles
    }
}
