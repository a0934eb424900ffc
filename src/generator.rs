//! Content generation for learning paths
//!
//! Wraps the text model behind a total function: whatever the model returns
//! (valid JSON, JSON wrapped in prose or code fences, garbage, or an error),
//! the caller always receives structurally valid content. Sections that come
//! back too small are replaced with deterministic fallback data.

use regex::Regex;
use tracing::{debug, error, warn};

use crate::fallback;
use crate::llm::TextModel;
use crate::models::GeneratedContent;

/// Minimum usable section sizes; anything smaller is replaced wholesale
const MIN_MODULES: usize = 2;
const MIN_RECOMMENDATIONS: usize = 3;
const MIN_QUIZ_QUESTIONS: usize = 5;

const PROMPT_TEMPLATE: &str = r#"You are an expert educational content creator. Generate a comprehensive learning path for "{topic}".

Return ONLY a valid JSON object with EXACTLY the following structure and nothing else:

{
    "modules": [
        {
            "title": "Module Title",
            "subtopics": ["Subtopic 1", "Subtopic 2", "Subtopic 3", "Subtopic 4", "Subtopic 5"]
        }
    ],
    "youtube_recommendations": [
        {
            "title": "Video Title",
            "url": "https://youtube.com/watch?v=example",
            "keywords": ["keyword1", "keyword2", "keyword3"]
        }
    ],
    "quiz_questions": [
        {
            "question": "Quiz Question?",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": "Option A"
        }
    ]
}

Requirements:
1. Provide EXACTLY 5 modules with progressive difficulty
2. Each module should have EXACTLY 5 detailed subtopics
3. Provide EXACTLY 5 high-quality YouTube recommendations from reputable educational channels
4. Provide EXACTLY 10 quiz questions with 4 options each
5. Ensure all content is directly relevant to "{topic}"
6. Make subtopics specific and actionable
7. Quiz questions should test understanding of key concepts
8. DO NOT include any explanatory text, only the JSON object
9. DO NOT use markdown formatting or code blocks"#;

/// Generates learning path content for a topic via the configured text model
pub struct ContentGenerator {
    model: Option<Box<dyn TextModel>>,
}

impl ContentGenerator {
    /// Create a generator; without a model every request gets fallback content
    pub fn new(model: Option<Box<dyn TextModel>>) -> Self {
        Self { model }
    }

    /// Generate content for a topic, repairing or replacing unusable output
    pub async fn generate(&self, topic: &str) -> GeneratedContent {
        let model = match &self.model {
            Some(model) => model,
            None => {
                warn!("Text model not configured, using fallback content for: {}", topic);
                return fallback::default_content(topic);
            }
        };

        let prompt = generation_prompt(topic);

        match model.generate(&prompt).await {
            Ok(response) => {
                debug!(
                    "Model response received ({} tokens)",
                    response.tokens_used.unwrap_or(0)
                );
                match parse_content(&response.content) {
                    Some(content) => repair_content(topic, content),
                    None => {
                        warn!("Could not parse model output, using fallback content for: {}", topic);
                        fallback::default_content(topic)
                    }
                }
            }
            Err(e) => {
                error!("Content generation failed for {}: {}", topic, e);
                fallback::default_content(topic)
            }
        }
    }
}

fn generation_prompt(topic: &str) -> String {
    PROMPT_TEMPLATE.replace("{topic}", topic)
}

/// Parse model output into content, tolerating prose or fences around the JSON
fn parse_content(raw: &str) -> Option<GeneratedContent> {
    let cleaned = clean_model_response(raw);

    if let Ok(content) = serde_json::from_str::<GeneratedContent>(&cleaned) {
        return Some(content);
    }

    debug!("Strict JSON parsing failed, extracting first object span");
    let span = extract_json_span(&cleaned)?;
    serde_json::from_str::<GeneratedContent>(span).ok()
}

/// Strip markdown code fences and surrounding whitespace from model output
fn clean_model_response(content: &str) -> String {
    let content = content.trim();

    if content.starts_with("```") {
        if let Some(start) = content.find('\n') {
            if let Some(end) = content.rfind("```") {
                if end > start {
                    return content[start + 1..end].trim().to_string();
                }
            }
        }
    }

    content.replace("```", "").trim().to_string()
}

/// Extract the first top-level `{...}` span (first `{` through last `}`)
fn extract_json_span(content: &str) -> Option<&str> {
    if let Ok(re) = Regex::new(r"(?s)\{.*\}") {
        return re.find(content).map(|m| m.as_str());
    }
    None
}

/// Replace sections that are too small to be a usable learning path
fn repair_content(topic: &str, mut content: GeneratedContent) -> GeneratedContent {
    if content.modules.len() < MIN_MODULES {
        warn!(
            "Model returned {} modules for {}, substituting defaults",
            content.modules.len(),
            topic
        );
        content.modules = fallback::default_modules(topic);
    }

    if content.youtube_recommendations.len() < MIN_RECOMMENDATIONS {
        warn!(
            "Model returned {} recommendations for {}, substituting defaults",
            content.youtube_recommendations.len(),
            topic
        );
        content.youtube_recommendations = fallback::default_recommendations(topic);
    }

    if content.quiz_questions.len() < MIN_QUIZ_QUESTIONS {
        warn!(
            "Model returned {} quiz questions for {}, substituting defaults",
            content.quiz_questions.len(),
            topic
        );
        content.quiz_questions = fallback::default_quiz_questions(topic);
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ModelProvider, ModelResponse, TextModel};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    struct CannedModel {
        reply: Result<String, String>,
    }

    impl CannedModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl TextModel for CannedModel {
        async fn generate(&self, _prompt: &str) -> Result<ModelResponse> {
            match &self.reply {
                Ok(content) => Ok(ModelResponse {
                    content: content.clone(),
                    tokens_used: Some(42),
                }),
                Err(message) => Err(anyhow!(message.clone())),
            }
        }

        async fn is_available(&self) -> bool {
            true
        }

        fn provider_type(&self) -> ModelProvider {
            ModelProvider::Gemini
        }
    }

    const WELL_FORMED: &str = r#"{
        "modules": [
            {"title": "Basics", "subtopics": ["Setup", "Syntax"]},
            {"title": "Ownership", "subtopics": ["Borrowing", "Lifetimes"]}
        ],
        "youtube_recommendations": [
            {"title": "A", "url": "https://youtube.com/watch?v=a", "keywords": []},
            {"title": "B", "url": "https://youtube.com/watch?v=b", "keywords": []},
            {"title": "C", "url": "https://youtube.com/watch?v=c", "keywords": []}
        ],
        "quiz_questions": [
            {"question": "Q1?", "options": ["a", "b", "c", "d"], "correct_answer": "a"},
            {"question": "Q2?", "options": ["a", "b", "c", "d"], "correct_answer": "b"},
            {"question": "Q3?", "options": ["a", "b", "c", "d"], "correct_answer": "c"},
            {"question": "Q4?", "options": ["a", "b", "c", "d"], "correct_answer": "d"},
            {"question": "Q5?", "options": ["a", "b", "c", "d"], "correct_answer": "a"}
        ]
    }"#;

    #[test]
    fn test_parse_content_accepts_clean_json() {
        let content = parse_content(WELL_FORMED).unwrap();
        assert_eq!(content.modules.len(), 2);
        assert_eq!(content.quiz_questions.len(), 5);
    }

    #[test]
    fn test_parse_content_strips_code_fences() {
        let fenced = format!("```json\n{}\n```", WELL_FORMED);
        let content = parse_content(&fenced).unwrap();
        assert_eq!(content.modules.len(), 2);
    }

    #[test]
    fn test_parse_content_extracts_span_from_prose() {
        let wrapped = format!("Here is your learning path:\n{}\nHope this helps!", WELL_FORMED);
        let content = parse_content(&wrapped).unwrap();
        assert_eq!(content.youtube_recommendations.len(), 3);
    }

    #[test]
    fn test_parse_content_rejects_plain_text() {
        assert!(parse_content("I cannot help with that request.").is_none());
    }

    #[test]
    fn test_repair_replaces_short_module_list() {
        let content: GeneratedContent =
            serde_json::from_str(r#"{"modules": [{"title": "Only One", "subtopics": []}]}"#)
                .unwrap();
        let repaired = repair_content("Rust", content);

        assert!(repaired.modules.len() >= 3);
        assert_eq!(repaired.modules[0].title, "Foundations of Rust");
        assert_eq!(repaired.modules[1].title, "Intermediate Rust");
        assert_eq!(repaired.modules[2].title, "Advanced Rust");
    }

    #[test]
    fn test_repair_keeps_sections_meeting_minimums() {
        let content = parse_content(WELL_FORMED).unwrap();
        let repaired = repair_content("Rust", content.clone());
        assert_eq!(repaired.modules, content.modules);
        assert_eq!(repaired.youtube_recommendations, content.youtube_recommendations);
        // 5 quiz questions is exactly the minimum
        assert_eq!(repaired.quiz_questions, content.quiz_questions);
    }

    #[tokio::test]
    async fn test_generate_without_model_uses_fallback() {
        let generator = ContentGenerator::new(None);
        let content = generator.generate("Chess").await;
        assert_eq!(content.modules.len(), 3);
        assert_eq!(content.youtube_recommendations.len(), 5);
        assert_eq!(content.quiz_questions.len(), 10);
    }

    #[tokio::test]
    async fn test_generate_repairs_malformed_reply() {
        let model = CannedModel::replying("Sorry, I can only answer questions about cooking.");
        let generator = ContentGenerator::new(Some(Box::new(model)));

        let content = generator.generate("Python Programming").await;
        assert_eq!(content.quiz_questions.len(), 10);
        for q in &content.quiz_questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.options.contains(&q.correct_answer));
        }
    }

    #[tokio::test]
    async fn test_generate_survives_model_error() {
        let model = CannedModel::failing("connection reset by peer");
        let generator = ContentGenerator::new(Some(Box::new(model)));

        let content = generator.generate("Rust").await;
        assert_eq!(content.modules.len(), 3);
        assert_eq!(content.modules[0].title, "Foundations of Rust");
    }

    #[test]
    fn test_generate_prompt_mentions_topic() {
        let prompt = generation_prompt("Linear Algebra");
        assert!(prompt.contains("\"Linear Algebra\""));
        assert!(prompt.contains("ONLY a valid JSON object"));
    }
}
