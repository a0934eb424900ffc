//! API module for the Learning Path AI service
//!
//! Provides the REST endpoints for path generation, lookup and service
//! introspection.

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::metrics::ServiceMetrics;
use crate::pipeline::PathAssembler;
use crate::store::PathStore;

pub mod handlers;
pub mod models;
pub mod server;

/// API server for handling REST requests
pub struct ApiServer {
    assembler: Arc<PathAssembler>,
    store: Arc<dyn PathStore>,
    metrics: Arc<ServiceMetrics>,
    host: String,
    port: u16,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(
        assembler: Arc<PathAssembler>,
        store: Arc<dyn PathStore>,
        metrics: Arc<ServiceMetrics>,
        host: String,
        port: u16,
    ) -> Self {
        Self {
            assembler,
            store,
            metrics,
            host,
            port,
        }
    }

    /// Start the API server in the background
    pub fn start_background(self) -> JoinHandle<Result<()>> {
        tokio::spawn(async move { self.start().await })
    }

    /// Start the API server
    pub async fn start(self) -> Result<()> {
        info!("🚀 Starting API server on port {}", self.port);

        server::start_http_server(
            self.assembler,
            self.store,
            self.metrics,
            &self.host,
            self.port,
        )
        .await
    }
}
