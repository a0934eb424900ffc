pub mod providers;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text model provider types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ModelProvider {
    Gemini,
    OpenAI,
}

/// Text model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub provider: ModelProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: ModelProvider::Gemini,
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            max_output_tokens: 8192,
            temperature: 0.7,
            timeout_seconds: 90,
        }
    }
}

/// Model response
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
    pub tokens_used: Option<u32>,
}

/// Trait for text generation providers
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<ModelResponse>;
    async fn is_available(&self) -> bool;
    fn provider_type(&self) -> ModelProvider;
}

/// Create a text model instance based on configuration
pub fn create_model(config: &ModelConfig) -> Result<Box<dyn TextModel>> {
    match config.provider {
        ModelProvider::Gemini => Ok(Box::new(providers::GeminiModel::new(config.clone())?)),
        ModelProvider::OpenAI => Ok(Box::new(providers::OpenAIModel::new(config.clone())?)),
    }
}
