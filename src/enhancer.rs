//! Recommendation enhancement
//!
//! Replaces the generator's placeholder video recommendations with live
//! search results gathered under a fixed query budget: 2 topic queries,
//! 1 query per module for the first 3 modules, 1 query per subtopic for the
//! first 2 subtopics of each of those modules, and at most 1 fill query.
//! Worst case is 12 search calls per enhancement pass.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{LearningPath, VideoRecommendation};
use crate::search::VideoSearch;

/// Upper bound on recommendations kept after deduplication
const MAX_RECOMMENDATIONS: usize = 5;

/// Enhances learning paths with live video search results
pub struct RecommendationEnhancer {
    search: Arc<dyn VideoSearch>,
}

impl RecommendationEnhancer {
    pub fn new(search: Arc<dyn VideoSearch>) -> Self {
        Self { search }
    }

    /// Replace `path.youtube_recommendations` with deduplicated search
    /// results; if every query comes back empty the generator's placeholders
    /// are left untouched
    pub async fn enhance(&self, topic: &str, path: &mut LearningPath) {
        let topic_lower = topic.to_lowercase();
        // Module titles and subtopics share one used-key set so the same
        // string is never queried twice
        let mut searched_keywords: HashSet<String> = HashSet::new();
        let mut collected: Vec<VideoRecommendation> = Vec::new();

        let topic_queries = [
            format!("{} complete tutorial", topic),
            format!("{} course for beginners", topic),
            format!("{} fundamentals", topic),
        ];

        for query in topic_queries.iter().take(2) {
            let tail = query.split_whitespace().last().unwrap_or_default().to_string();
            for video in self.search.search(query, 2).await {
                collected.push(VideoRecommendation {
                    title: video.title,
                    url: video.url,
                    keywords: vec![topic_lower.clone(), tail.clone(), "tutorial".to_string()],
                });
            }
        }

        for module in path.modules.iter().take(3) {
            if !module.title.is_empty() && !searched_keywords.contains(&module.title) {
                let query = format!("{} explained", module.title);
                for video in self.search.search(&query, 1).await {
                    collected.push(VideoRecommendation {
                        title: video.title,
                        url: video.url,
                        keywords: vec![
                            topic_lower.clone(),
                            module.title.to_lowercase(),
                            "module".to_string(),
                        ],
                    });
                }
                // Marked used whether or not a video came back
                searched_keywords.insert(module.title.clone());
            }

            for subtopic in module.subtopics.iter().take(2) {
                if !subtopic.is_empty() && !searched_keywords.contains(subtopic) {
                    let query = format!("{} {} tutorial", subtopic, topic);
                    for video in self.search.search(&query, 1).await {
                        collected.push(VideoRecommendation {
                            title: video.title,
                            url: video.url,
                            keywords: vec![
                                topic_lower.clone(),
                                subtopic.to_lowercase(),
                                "concept".to_string(),
                            ],
                        });
                    }
                    searched_keywords.insert(subtopic.clone());
                }
            }
        }

        if collected.len() < MAX_RECOMMENDATIONS {
            let fill_count = (MAX_RECOMMENDATIONS - collected.len()) as u32;
            let query = format!("{} advanced tutorial", topic);
            for video in self.search.search(&query, fill_count).await {
                collected.push(VideoRecommendation {
                    title: video.title,
                    url: video.url,
                    keywords: vec![
                        topic_lower.clone(),
                        "advanced".to_string(),
                        "tutorial".to_string(),
                    ],
                });
            }
        }

        let unique = dedup_by_url(collected);

        if unique.is_empty() {
            warn!("Could not find videos for {}, keeping generated recommendations", topic);
        } else {
            info!("🎬 Enhanced {} with {} searched videos", topic, unique.len());
            path.youtube_recommendations = unique;
        }
    }
}

/// Deduplicate by url in first-seen order and cap the list length
pub fn dedup_by_url(recommendations: Vec<VideoRecommendation>) -> Vec<VideoRecommendation> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for recommendation in recommendations {
        if seen_urls.insert(recommendation.url.clone()) {
            unique.push(recommendation);
        }
    }

    unique.truncate(MAX_RECOMMENDATIONS);
    unique
}
