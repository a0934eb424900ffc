//! In-memory path storage
//!
//! Used whenever Supabase credentials are absent. Paths live in a
//! process-local map and disappear on restart, which is enough for local
//! development and tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PathStore, StoreError, StoredPath};
use crate::models::LearningPath;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    paths: Arc<RwLock<HashMap<String, StoredPath>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PathStore for MemoryStore {
    async fn insert(
        &self,
        path: &LearningPath,
        user_id: Option<&str>,
    ) -> Result<StoredPath, StoreError> {
        let stored = StoredPath {
            id: Uuid::new_v4().to_string(),
            topic: path.topic.clone(),
            modules: path.modules.clone(),
            youtube_recommendations: path.youtube_recommendations.clone(),
            quiz_questions: path.quiz_questions.clone(),
            user_id: user_id.map(|u| u.to_string()),
            created_at: Utc::now(),
        };

        self.paths
            .write()
            .await
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn fetch(&self, id: &str) -> Result<Option<StoredPath>, StoreError> {
        Ok(self.paths.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::default_content;
    use crate::store::PLACEHOLDER_ID;

    fn sample_path(topic: &str) -> LearningPath {
        LearningPath::from_content(topic, default_content(topic))
    }

    #[tokio::test]
    async fn test_insert_then_fetch_round_trip() {
        let store = MemoryStore::new();
        let stored = store
            .insert(&sample_path("Rust"), Some("user-1"))
            .await
            .expect("insert succeeds");

        assert_ne!(stored.id, PLACEHOLDER_ID);

        let fetched = store.fetch(&stored.id).await.expect("fetch succeeds");
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_is_none() {
        let store = MemoryStore::new();
        let fetched = store.fetch("no-such-id").await.expect("fetch succeeds");
        assert_eq!(fetched, None);
    }

    #[tokio::test]
    async fn test_inserts_get_distinct_ids() {
        let store = MemoryStore::new();
        let first = store.insert(&sample_path("Rust"), None).await.unwrap();
        let second = store.insert(&sample_path("Rust"), None).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
