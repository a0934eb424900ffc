//! API data models

use serde::{Deserialize, Serialize};

use crate::models::{Module, QuizQuestion, VideoRecommendation};
use crate::store::StoredPath;

/// Body of `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Learning path as returned to API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathResponse {
    pub id: String,
    pub topic: String,
    pub modules: Vec<Module>,
    pub youtube_recommendations: Vec<VideoRecommendation>,
    pub quiz_questions: Vec<QuizQuestion>,
}

impl From<StoredPath> for LearningPathResponse {
    fn from(stored: StoredPath) -> Self {
        Self {
            id: stored.id,
            topic: stored.topic,
            modules: stored.modules,
            youtube_recommendations: stored.youtube_recommendations,
            quiz_questions: stored.quiz_questions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_user_id_is_optional() {
        let request: GenerateRequest = serde_json::from_str(r#"{"topic": "Rust"}"#).unwrap();
        assert_eq!(request.topic, "Rust");
        assert_eq!(request.user_id, None);
    }

    #[test]
    fn test_response_from_stored_path() {
        let stored = StoredPath {
            id: "id-1".to_string(),
            topic: "Rust".to_string(),
            modules: vec![],
            youtube_recommendations: vec![],
            quiz_questions: vec![],
            user_id: Some("user-1".to_string()),
            created_at: chrono::Utc::now(),
        };

        let response = LearningPathResponse::from(stored);
        assert_eq!(response.id, "id-1");
        assert_eq!(response.topic, "Rust");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("user_id").is_none());
        assert!(json.get("created_at").is_none());
    }
}
