//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use textlens_core::config::defaults;
use textlens_core::{Analyzer, AnalyzerConfig, ProfileRegistry};

use crate::error::ServerError;

/// Server configuration file
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ServerConfig {
    /// Listener configuration
    #[serde(default)]
    pub server: ListenerConfig,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Extra language profiles
    #[serde(default)]
    pub languages: LanguagesConfig,
}

/// Listener-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    pub host: String,
    pub port: u16,
    /// Name reported by the liveness endpoint
    pub service_name: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            service_name: "Text Analysis API".to_string(),
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub keyword_count: usize,
    pub summary_sentences: usize,
    /// Run the LSA stage before the heuristic fallback
    pub statistical_summary: bool,
    pub reduction_ratio: f64,
    pub min_language_confidence: f64,
    /// Longer texts go straight to the heuristic summary
    pub max_statistical_sentences: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            keyword_count: defaults::KEYWORD_COUNT,
            summary_sentences: defaults::SUMMARY_SENTENCES,
            statistical_summary: true,
            reduction_ratio: defaults::REDUCTION_RATIO,
            min_language_confidence: defaults::MIN_LANGUAGE_CONFIDENCE,
            max_statistical_sentences: defaults::MAX_STATISTICAL_SENTENCES,
        }
    }
}

/// Language profile configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LanguagesConfig {
    /// Profile TOML files loaded on top of the built-in profiles
    pub profiles: Vec<PathBuf>,
}

impl ServerConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ServerError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ServerError::ConfigError(e.to_string()).into())
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validated core configuration
    pub fn analyzer_config(&self) -> Result<AnalyzerConfig> {
        let analysis = &self.analysis;
        AnalyzerConfig::builder()
            .keyword_count(analysis.keyword_count)
            .summary_sentences(analysis.summary_sentences)
            .statistical_summary(analysis.statistical_summary)
            .reduction_ratio(analysis.reduction_ratio)
            .min_language_confidence(analysis.min_language_confidence)
            .max_statistical_sentences(analysis.max_statistical_sentences)
            .build()
            .map_err(|e| ServerError::ConfigError(e.to_string()).into())
    }

    /// Built-in profiles plus the configured profile files
    pub fn profile_registry(&self) -> Result<ProfileRegistry> {
        ProfileRegistry::with_files(&self.languages.profiles)
            .context("Failed to load language profiles")
    }

    /// Analyzer assembled from this configuration
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::builder()
            .config(self.analyzer_config()?)
            .profiles(self.profile_registry()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.service_name, "Text Analysis API");
        assert_eq!(config.analysis.keyword_count, 5);
        assert!(config.analysis.statistical_summary);
        assert!(config.languages.profiles.is_empty());
    }

    #[test]
    fn test_analysis_defaults_match_core() {
        let from_file = ServerConfig::default().analyzer_config().unwrap();
        assert_eq!(from_file, AnalyzerConfig::default());
    }

    #[test]
    fn test_sentence_limit_is_forwarded() {
        let config = ServerConfig::from_toml_str("[analysis]\nmax_statistical_sentences = 40\n")
            .unwrap();
        assert_eq!(config.analyzer_config().unwrap().max_statistical_sentences(), 40);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = ServerConfig::from_toml_str(
            r#"
[server]
port = 9100

[analysis]
keyword_count = 3
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.analysis.keyword_count, 3);
        assert_eq!(config.analysis.summary_sentences, 2);
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_invalid_analysis_settings() {
        let mut config = ServerConfig::default();
        config.analysis.reduction_ratio = 0.0;
        assert!(config.analyzer_config().is_err());
        assert!(config.build_analyzer().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file(Path::new("/nonexistent/textlens.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ServerError>(),
            Some(ServerError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
service_name = "Lens"

[analysis]
statistical_summary = false
"#
        )
        .unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.service_name, "Lens");
        assert!(!config.analyzer_config().unwrap().statistical_summary());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = ServerConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), config);
    }
}
