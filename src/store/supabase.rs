//! Supabase-backed path storage
//!
//! Talks to the Supabase PostgREST endpoint directly: inserts go to
//! `POST /rest/v1/{table}` with `Prefer: return=representation` so the
//! database-assigned id and timestamp come back in the same round trip,
//! lookups filter with PostgREST's `id=eq.{id}` syntax.

use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use super::{PathStore, StoreError, StoredPath};
use crate::models::{LearningPath, Module, QuizQuestion, VideoRecommendation};

/// Connection settings for the Supabase REST endpoint
#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: Option<String>,

    /// Service role or anon API key
    pub key: Option<String>,

    /// Table holding learning path rows
    pub table: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            table: "learning_paths".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Row shape sent on insert; id and created_at are assigned by the database
#[derive(Serialize)]
struct NewPathRow<'a> {
    topic: &'a str,
    modules: &'a [Module],
    youtube_recommendations: &'a [VideoRecommendation],
    quiz_questions: &'a [QuizQuestion],
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
}

pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    key: String,
    table: String,
}

impl SupabaseStore {
    /// Build a store from settings; fails with
    /// [`StoreError::MissingCredentials`] when url or key is absent so the
    /// caller can fall back to in-memory storage
    pub fn new(settings: SupabaseSettings) -> Result<Self, StoreError> {
        let (url, key) = match (settings.url, settings.key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => (url, key),
            _ => return Err(StoreError::MissingCredentials),
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_string(),
            key,
            table: settings.table,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// PostgREST answers with a JSON array of rows for both inserts and
    /// filtered selects
    fn parse_rows(body: &str) -> Result<Vec<StoredPath>, StoreError> {
        Ok(serde_json::from_str(body)?)
    }

    async fn read_rows(&self, response: reqwest::Response) -> Result<Vec<StoredPath>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Self::parse_rows(&body)
    }
}

#[async_trait::async_trait]
impl PathStore for SupabaseStore {
    async fn insert(
        &self,
        path: &LearningPath,
        user_id: Option<&str>,
    ) -> Result<StoredPath, StoreError> {
        let row = NewPathRow {
            topic: &path.topic,
            modules: &path.modules,
            youtube_recommendations: &path.youtube_recommendations,
            quiz_questions: &path.quiz_questions,
            user_id,
        };

        let response = self
            .client
            .post(self.table_url())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;

        let rows = self.read_rows(response).await?;
        debug!("Inserted learning path for topic: {}", path.topic);
        rows.into_iter().next().ok_or(StoreError::EmptyInsert)
    }

    async fn fetch(&self, id: &str) -> Result<Option<StoredPath>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .query(&[("id", format!("eq.{}", id)), ("select", "*".to_string())])
            .send()
            .await?;

        let rows = self.read_rows(response).await?;
        Ok(rows.into_iter().next())
    }
}
