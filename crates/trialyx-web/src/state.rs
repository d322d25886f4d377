//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use trialyx_registry::{LiveRegistry, MockRegistry, TitleHeuristics, TrialDataSource, TrialEnricher};

use crate::config::Config;

/// Shared state injected into every handler: the data source and the
/// enrichment heuristics, both chosen once at process start.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TrialDataSource>,
    pub enricher: Arc<dyn TrialEnricher>,
    pub source_mode: String,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source: Arc<dyn TrialDataSource> = match config.registry.mode.as_str() {
            "mock" => Arc::new(MockRegistry),
            _ => Arc::new(LiveRegistry::new(
                config.registry.base_url.clone(),
                Duration::from_secs(config.registry.timeout_secs),
            )?),
        };
        Ok(Self {
            source,
            enricher: Arc::new(TitleHeuristics),
            source_mode: config.registry.mode.clone(),
        })
    }

    /// Simulated state for tests and offline runs.
    pub fn mock() -> Self {
        Self {
            source: Arc::new(MockRegistry),
            enricher: Arc::new(TitleHeuristics),
            source_mode: "mock".to_string(),
        }
    }
}

pub type SharedState = Arc<AppState>;
