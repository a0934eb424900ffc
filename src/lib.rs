//! Learning Path AI - Rust Implementation
//!
//! Backend service that generates structured learning paths with a text
//! model, enriches them with YouTube video recommendations, and persists
//! them for retrieval over a REST API.

pub mod api;
pub mod config;
pub mod enhancer;
pub mod fallback;
pub mod generator;
pub mod llm;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod search;
pub mod store;

// Re-export main types for easy access
pub use crate::api::ApiServer;
pub use crate::config::Config;
pub use crate::enhancer::RecommendationEnhancer;
pub use crate::generator::ContentGenerator;
pub use crate::llm::{ModelConfig, ModelProvider, TextModel};
pub use crate::metrics::{MetricsSnapshot, ServiceMetrics};
pub use crate::models::{LearningPath, Module, QuizQuestion, VideoRecommendation};
pub use crate::pipeline::PathAssembler;
pub use crate::search::{VideoSearch, YouTubeSearchClient};
pub use crate::store::{MemoryStore, PathStore, StoredPath, SupabaseStore};
