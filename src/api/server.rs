//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{handlers, models::GenerateRequest};
use crate::metrics::ServiceMetrics;
use crate::pipeline::PathAssembler;
use crate::store::PathStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<PathAssembler>,
    pub store: Arc<dyn PathStore>,
    pub metrics: Arc<ServiceMetrics>,
}

/// Configure and start the HTTP server
pub async fn start_http_server(
    assembler: Arc<PathAssembler>,
    store: Arc<dyn PathStore>,
    metrics: Arc<ServiceMetrics>,
    host: &str,
    port: u16,
) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    let app_state = AppState {
        assembler,
        store,
        metrics,
    };

    // Configure CORS to allow browser access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build the application with routes
    let app = Router::new()
        // Service info endpoints
        .route("/", get(banner_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Learning path endpoints
        .route("/generate", post(generate_handler))
        .route("/learning-path/:id", get(learning_path_handler))
        // Add state and middleware
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    info!("🌐 API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    match handlers::health_check().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Root banner handler
async fn banner_handler() -> impl IntoResponse {
    match handlers::service_banner().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Learning path generation handler
///
/// Generation runs on a spawned task; a client disconnect does not abort the
/// in-flight pipeline.
async fn generate_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> impl IntoResponse {
    if payload.topic.trim().is_empty() {
        let status = StatusCode::BAD_REQUEST;
        return (
            status,
            Json(serde_json::json!({"error": "Topic must not be empty"})),
        )
            .into_response();
    }

    let assembler = state.assembler.clone();
    let outcome =
        tokio::spawn(async move { handlers::generate_learning_path(&assembler, payload).await })
            .await;

    match outcome {
        Ok(Ok(data)) => (StatusCode::CREATED, Json(data)).into_response(),
        Ok(Err(e)) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
        Err(e) => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Learning path lookup handler
async fn learning_path_handler(
    State(state): State<AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
) -> impl IntoResponse {
    match handlers::get_learning_path(&state.store, &id).await {
        Ok(Some(data)) => (StatusCode::OK, Json(data)).into_response(),
        Ok(None) => {
            let status = StatusCode::NOT_FOUND;
            (
                status,
                Json(serde_json::json!({"error": format!("Learning path not found: {}", id)})),
            )
                .into_response()
        }
        Err(e) => {
            let status = StatusCode::SERVICE_UNAVAILABLE;
            (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Metrics snapshot handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics.snapshot())).into_response()
}
