//! Service metrics
//!
//! Lock-free counters shared across requests, exposed as a JSON snapshot on
//! `GET /metrics`. A [`RequestTimer`] guard brackets each generation request
//! so the active gauge and duration totals stay correct on every exit path.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::models::LearningPath;

#[derive(Debug, Default)]
pub struct ServiceMetrics {
    learning_paths_generated: AtomicU64,
    youtube_recommendations_requested: AtomicU64,
    quiz_questions_generated: AtomicU64,
    active_requests: AtomicU64,
    generation_millis_total: AtomicU64,
    generation_count: AtomicU64,
}

/// Point-in-time view of all counters
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub learning_paths_generated: u64,
    pub youtube_recommendations_requested: u64,
    pub quiz_questions_generated: u64,
    pub active_requests: u64,
    pub generation_seconds_total: f64,
    pub generation_count: u64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one generated path along with its recommendation and quiz sizes
    pub fn record_path(&self, path: &LearningPath) {
        self.learning_paths_generated.fetch_add(1, Ordering::Relaxed);
        self.youtube_recommendations_requested
            .fetch_add(path.youtube_recommendations.len() as u64, Ordering::Relaxed);
        self.quiz_questions_generated
            .fetch_add(path.quiz_questions.len() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            learning_paths_generated: self.learning_paths_generated.load(Ordering::Relaxed),
            youtube_recommendations_requested: self
                .youtube_recommendations_requested
                .load(Ordering::Relaxed),
            quiz_questions_generated: self.quiz_questions_generated.load(Ordering::Relaxed),
            active_requests: self.active_requests.load(Ordering::Relaxed),
            generation_seconds_total: self.generation_millis_total.load(Ordering::Relaxed) as f64
                / 1000.0,
            generation_count: self.generation_count.load(Ordering::Relaxed),
        }
    }
}

/// Guard covering one generation request from start to completion
pub struct RequestTimer {
    metrics: Arc<ServiceMetrics>,
    started: Instant,
}

impl RequestTimer {
    pub fn start(metrics: Arc<ServiceMetrics>) -> Self {
        metrics.active_requests.fetch_add(1, Ordering::Relaxed);
        Self {
            metrics,
            started: Instant::now(),
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        self.metrics.active_requests.fetch_sub(1, Ordering::Relaxed);
        self.metrics
            .generation_millis_total
            .fetch_add(self.started.elapsed().as_millis() as u64, Ordering::Relaxed);
        self.metrics.generation_count.fetch_add(1, Ordering::Relaxed);
    }
}
