use super::{VideoRecord, VideoSearch};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info, warn};

/// YouTube search settings
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://www.googleapis.com/youtube/v3/search".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// YouTube Data API search client
pub struct YouTubeSearchClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    description: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: String,
    thumbnails: serde_json::Value,
}

impl YouTubeSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { settings, client })
    }

    async fn try_search(&self, api_key: &str, query: &str, max_results: u32) -> Result<Vec<VideoRecord>> {
        let max_results_param = max_results.to_string();
        // videoDuration=medium biases results toward tutorial-length videos
        let params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "video"),
            ("maxResults", max_results_param.as_str()),
            ("key", api_key),
            ("videoDuration", "medium"),
            ("order", "relevance"),
        ];

        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("YouTube API error {}: {}", status, text));
        }

        let body: SearchResponse = response.json().await?;
        Ok(to_records(body, max_results))
    }
}

#[async_trait]
impl VideoSearch for YouTubeSearchClient {
    async fn search(&self, query: &str, max_results: u32) -> Vec<VideoRecord> {
        if max_results == 0 {
            return Vec::new();
        }

        let api_key = match &self.settings.api_key {
            Some(key) => key.clone(),
            None => {
                warn!("YouTube API key not configured, returning no results");
                return Vec::new();
            }
        };

        match self.try_search(&api_key, query, max_results).await {
            Ok(videos) => {
                info!("🔎 Found {} YouTube videos for query: {}", videos.len(), query);
                videos
            }
            Err(e) => {
                error!("Error searching YouTube for {}: {}", query, e);
                Vec::new()
            }
        }
    }
}

fn to_records(response: SearchResponse, max_results: u32) -> Vec<VideoRecord> {
    response
        .items
        .into_iter()
        .take(max_results as usize)
        .map(|item| VideoRecord {
            title: item.snippet.title,
            url: format!("https://www.youtube.com/watch?v={}", item.id.video_id),
            description: truncate_description(&item.snippet.description),
            channel: item.snippet.channel_title,
            published_at: item.snippet.published_at,
            thumbnails: item.snippet.thumbnails,
        })
        .collect()
}

/// Truncate to 200 characters with an ellipsis marker, respecting char
/// boundaries
fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(200) {
        Some((index, _)) => format!("{}...", &description[..index]),
        None => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> SearchResponse {
        serde_json::from_str(
            r#"{
                "items": [
                    {
                        "id": {"videoId": "abc123"},
                        "snippet": {
                            "title": "Rust Tutorial",
                            "description": "Learn Rust",
                            "channelTitle": "RustChannel",
                            "publishedAt": "2024-03-01T10:00:00Z",
                            "thumbnails": {"default": {"url": "https://i.ytimg.com/vi/abc123/default.jpg"}}
                        }
                    },
                    {
                        "id": {"videoId": "def456"},
                        "snippet": {
                            "title": "More Rust",
                            "description": "Ownership deep dive",
                            "channelTitle": "RustChannel",
                            "publishedAt": "2024-04-01T10:00:00Z",
                            "thumbnails": {}
                        }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_to_records_maps_snippet_fields() {
        let records = to_records(sample_response(), 5);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(records[0].title, "Rust Tutorial");
        assert_eq!(records[0].channel, "RustChannel");
        assert_eq!(records[0].published_at, "2024-03-01T10:00:00Z");
    }

    #[test]
    fn test_to_records_honors_max_results() {
        let records = to_records(sample_response(), 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_response_without_items_decodes_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(to_records(response, 5).is_empty());
    }

    #[test]
    fn test_item_without_video_id_fails_decode() {
        // A single malformed item invalidates the whole response, which the
        // caller then degrades to an empty result
        let result = serde_json::from_str::<SearchResponse>(
            r#"{"items": [{"id": {}, "snippet": {
                "title": "t", "description": "d", "channelTitle": "c",
                "publishedAt": "p", "thumbnails": {}}}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_truncate_description_short_passthrough() {
        assert_eq!(truncate_description("short"), "short");
        let exactly_200 = "a".repeat(200);
        assert_eq!(truncate_description(&exactly_200), exactly_200);
    }

    #[test]
    fn test_truncate_description_long_adds_ellipsis() {
        let long = "b".repeat(250);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_description_multibyte_safe() {
        let long = "é".repeat(300);
        let truncated = truncate_description(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.starts_with('é'));
    }

    #[tokio::test]
    async fn test_search_without_api_key_returns_empty() {
        let client = YouTubeSearchClient::new(SearchSettings::default()).unwrap();
        let results = client.search("rust tutorial", 3).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_with_zero_max_results_skips_request() {
        let client = YouTubeSearchClient::new(SearchSettings {
            api_key: Some("test-key".to_string()),
            // Unroutable endpoint; the zero-results guard must return before
            // any request is attempted
            endpoint: "http://127.0.0.1:1/search".to_string(),
            ..SearchSettings::default()
        })
        .unwrap();

        let results = client.search("rust tutorial", 0).await;
        assert!(results.is_empty());
    }
}
