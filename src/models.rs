//! Domain models for learning path generation

use serde::{Deserialize, Serialize};

/// A titled group of subtopics within a learning path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

/// A curated video recommendation; identity is the `url` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecommendation {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A quiz question with four options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Raw content sections produced by the text model for a topic
///
/// All sections default to empty so partial model output still decodes;
/// the generator's repair step fills in whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub youtube_recommendations: Vec<VideoRecommendation>,
    #[serde(default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

/// A learning path being assembled for a topic
///
/// The record is mutable only until persistence: the enhancer replaces
/// `youtube_recommendations` in place, then the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub topic: String,
    pub modules: Vec<Module>,
    pub youtube_recommendations: Vec<VideoRecommendation>,
    pub quiz_questions: Vec<QuizQuestion>,
}

impl LearningPath {
    /// Merge generated content into a path record for the given topic
    pub fn from_content(topic: &str, content: GeneratedContent) -> Self {
        Self {
            topic: topic.to_string(),
            modules: content.modules,
            youtube_recommendations: content.youtube_recommendations,
            quiz_questions: content.quiz_questions,
        }
    }
}
