use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelRunner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// External model used by the advisory flows. `UnconfiguredRunner` when no API key is set.
    pub runner: Arc<dyn ModelRunner>,
}

impl AppState {
    pub fn new(config: Config, runner: Arc<dyn ModelRunner>) -> Self {
        Self { config, runner }
    }
}
