use std::sync::Arc;

use textlens_core::Analyzer;

/// State shared by all request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
    service_name: Arc<str>,
}

impl AppState {
    pub fn new(analyzer: Analyzer, service_name: impl Into<String>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            service_name: Arc::from(service_name.into()),
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}
