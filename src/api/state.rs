use std::sync::Arc;

use crate::analytics::AnalyticsEngine;
use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::extraction::MetricExtractor;
use crate::llm::LlmProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub llm: LlmProvider,
    pub extractor: MetricExtractor,
    pub analytics: AnalyticsEngine,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>, llm: LlmProvider) -> Self {
        let config = Arc::new(config);
        let extractor = MetricExtractor::new(llm.clone());
        let analytics = AnalyticsEngine::new(db.clone(), llm.clone());

        Self {
            config,
            db,
            llm,
            extractor,
            analytics,
        }
    }
}
