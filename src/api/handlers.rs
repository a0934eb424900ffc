//! API request handlers

use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

use super::models::{GenerateRequest, LearningPathResponse};
use crate::pipeline::PathAssembler;
use crate::store::{PathStore, StoreError};

/// Handle health check requests
pub async fn health_check() -> Result<Value> {
    Ok(serde_json::json!({
        "status": "healthy",
        "service": "learning-path-ai",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle root banner requests
pub async fn service_banner() -> Result<Value> {
    Ok(serde_json::json!({
        "message": "Learning Path AI is running!"
    }))
}

/// Handle learning path generation requests
pub async fn generate_learning_path(
    assembler: &Arc<PathAssembler>,
    request: GenerateRequest,
) -> Result<LearningPathResponse> {
    let stored = assembler
        .assemble(&request.topic, request.user_id.as_deref())
        .await?;
    Ok(LearningPathResponse::from(stored))
}

/// Handle learning path lookup requests; `Ok(None)` means the id is unknown,
/// `Err` means the store could not answer
pub async fn get_learning_path(
    store: &Arc<dyn PathStore>,
    id: &str,
) -> Result<Option<LearningPathResponse>, StoreError> {
    Ok(store.fetch(id).await?.map(LearningPathResponse::from))
}
