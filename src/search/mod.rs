pub mod youtube;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use youtube::{SearchSettings, YouTubeSearchClient};

/// A normalized video search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    pub description: String,
    pub channel: String,
    pub published_at: String,
    pub thumbnails: serde_json::Value,
}

/// Trait for video search providers
///
/// Implementations degrade to an empty result on any failure (missing
/// credential, transport error, bad status, undecodable body) so callers
/// can treat "no results" uniformly regardless of cause.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Vec<VideoRecord>;
}
