//! Deterministic fallback content
//!
//! One topic-parametrized source of default modules, recommendations, and
//! quiz questions, used both when the text model fails outright and when a
//! generated section comes back too small to be useful.

use crate::models::{GeneratedContent, Module, QuizQuestion, VideoRecommendation};

/// Full fallback content for a topic
pub fn default_content(topic: &str) -> GeneratedContent {
    GeneratedContent {
        modules: default_modules(topic),
        youtube_recommendations: default_recommendations(topic),
        quiz_questions: default_quiz_questions(topic),
    }
}

/// Three-module beginner-to-advanced outline
pub fn default_modules(topic: &str) -> Vec<Module> {
    vec![
        Module {
            title: format!("Foundations of {}", topic),
            subtopics: vec![
                format!("Introduction to {}", topic),
                "Basic Principles".to_string(),
                "Core Components".to_string(),
                "Essential Tools".to_string(),
                "Getting Started".to_string(),
            ],
        },
        Module {
            title: format!("Intermediate {}", topic),
            subtopics: vec![
                "Advanced Concepts".to_string(),
                "Practical Applications".to_string(),
                "Problem Solving".to_string(),
                "Best Practices".to_string(),
                "Real-world Examples".to_string(),
            ],
        },
        Module {
            title: format!("Advanced {}", topic),
            subtopics: vec![
                "Expert Techniques".to_string(),
                "Optimization Strategies".to_string(),
                "Industry Applications".to_string(),
                "Cutting-edge Developments".to_string(),
                "Future Trends".to_string(),
            ],
        },
    ]
}

/// Five placeholder recommendations with distinct urls so they survive
/// url-based deduplication
pub fn default_recommendations(topic: &str) -> Vec<VideoRecommendation> {
    let lower = topic.to_lowercase();
    vec![
        VideoRecommendation {
            title: format!("Complete {} Course for Beginners", topic),
            url: "https://youtube.com/watch?v=beginner".to_string(),
            keywords: vec![lower.clone(), "course".to_string(), "beginner".to_string()],
        },
        VideoRecommendation {
            title: format!("Advanced {} Tutorial", topic),
            url: "https://youtube.com/watch?v=advanced".to_string(),
            keywords: vec![lower.clone(), "tutorial".to_string(), "advanced".to_string()],
        },
        VideoRecommendation {
            title: format!("{} Projects and Examples", topic),
            url: "https://youtube.com/watch?v=projects".to_string(),
            keywords: vec![lower.clone(), "projects".to_string(), "examples".to_string()],
        },
        VideoRecommendation {
            title: format!("{} Tips and Tricks", topic),
            url: "https://youtube.com/watch?v=tips".to_string(),
            keywords: vec![lower.clone(), "tips".to_string(), "tricks".to_string()],
        },
        VideoRecommendation {
            title: format!("Mastering {}", topic),
            url: "https://youtube.com/watch?v=master".to_string(),
            keywords: vec![lower, "master".to_string(), "expert".to_string()],
        },
    ]
}

/// Ten generic quiz questions; the correct answer is always the first option
pub fn default_quiz_questions(topic: &str) -> Vec<QuizQuestion> {
    vec![
        question(
            format!("What is the primary purpose of {}?", topic),
            [
                format!("To solve {}-related problems", topic),
                "To create art".to_string(),
                "To play games".to_string(),
                "To browse the internet".to_string(),
            ],
        ),
        question(
            format!("Which of these is a fundamental concept in {}?", topic),
            [
                "Core principle 1".to_string(),
                "Random concept".to_string(),
                "Irrelevant topic".to_string(),
                "Unrelated field".to_string(),
            ],
        ),
        question(
            format!("What is an important skill in {}?", topic),
            [
                "Key skill".to_string(),
                "Unrelated ability".to_string(),
                "Irrelevant knowledge".to_string(),
                "Random talent".to_string(),
            ],
        ),
        question(
            format!("What tool is commonly used in {}?", topic),
            [
                "Essential tool".to_string(),
                "Unrelated software".to_string(),
                "Irrelevant application".to_string(),
                "Random program".to_string(),
            ],
        ),
        question(
            format!("What is a benefit of learning {}?", topic),
            [
                "Key benefit".to_string(),
                "Unrelated advantage".to_string(),
                "Irrelevant gain".to_string(),
                "Random improvement".to_string(),
            ],
        ),
        question(
            format!("What is a common challenge in {}?", topic),
            [
                "Typical difficulty".to_string(),
                "Unrelated obstacle".to_string(),
                "Irrelevant problem".to_string(),
                "Random issue".to_string(),
            ],
        ),
        question(
            format!("What is an advanced technique in {}?", topic),
            [
                "Expert method".to_string(),
                "Basic approach".to_string(),
                "Simple technique".to_string(),
                "Elementary strategy".to_string(),
            ],
        ),
        question(
            format!("What is a best practice in {}?", topic),
            [
                "Recommended approach".to_string(),
                "Outdated method".to_string(),
                "Inefficient technique".to_string(),
                "Poor strategy".to_string(),
            ],
        ),
        question(
            format!("What is a real-world application of {}?", topic),
            [
                "Practical use case".to_string(),
                "Theoretical concept".to_string(),
                "Academic exercise".to_string(),
                "Hypothetical scenario".to_string(),
            ],
        ),
        question(
            format!("What is the future of {}?", topic),
            [
                "Emerging trend".to_string(),
                "Declining field".to_string(),
                "Stagnant area".to_string(),
                "Obsolete technology".to_string(),
            ],
        ),
    ]
}

fn question(text: String, options: [String; 4]) -> QuizQuestion {
    QuizQuestion {
        question: text,
        correct_answer: options[0].clone(),
        options: options.to_vec(),
    }
}
