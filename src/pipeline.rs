//! Learning path assembly pipeline
//!
//! Runs one request end to end: generate content, enhance recommendations
//! with live search, record metrics, persist. Upstream failures are absorbed
//! along the way, so a request that reaches the assembler always produces a
//! complete learning path.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::enhancer::RecommendationEnhancer;
use crate::generator::ContentGenerator;
use crate::metrics::{RequestTimer, ServiceMetrics};
use crate::models::LearningPath;
use crate::store::{PathStore, StoredPath};

pub struct PathAssembler {
    generator: ContentGenerator,
    enhancer: RecommendationEnhancer,
    store: Arc<dyn PathStore>,
    metrics: Arc<ServiceMetrics>,
}

impl PathAssembler {
    pub fn new(
        generator: ContentGenerator,
        enhancer: RecommendationEnhancer,
        store: Arc<dyn PathStore>,
        metrics: Arc<ServiceMetrics>,
    ) -> Self {
        Self {
            generator,
            enhancer,
            store,
            metrics,
        }
    }

    /// Assemble, enhance and persist one learning path
    pub async fn assemble(&self, topic: &str, user_id: Option<&str>) -> Result<StoredPath> {
        // Timer holds the active-request gauge until every exit path
        let _timer = RequestTimer::start(self.metrics.clone());
        info!("🧭 Assembling learning path for topic: {}", topic);

        let content = self.generator.generate(topic).await;
        let mut path = LearningPath::from_content(topic, content);

        self.enhancer.enhance(topic, &mut path).await;
        self.metrics.record_path(&path);

        let stored = match self.store.insert(&path, user_id).await {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to persist learning path: {}, serving unsaved copy", e);
                StoredPath::stand_in(&path, user_id)
            }
        };

        info!("✅ Learning path ready for topic: {} (id: {})", topic, stored.id);
        Ok(stored)
    }
}
