use anyhow::Result;
use clap::{Arg, Command};
use std::sync::Arc;
use tracing::{info, warn};

use learning_path_ai::api::ApiServer;
use learning_path_ai::config::Config;
use learning_path_ai::enhancer::RecommendationEnhancer;
use learning_path_ai::generator::ContentGenerator;
use learning_path_ai::llm::{create_model, ModelConfig, TextModel};
use learning_path_ai::metrics::ServiceMetrics;
use learning_path_ai::pipeline::PathAssembler;
use learning_path_ai::search::{SearchSettings, YouTubeSearchClient};
use learning_path_ai::store::{MemoryStore, PathStore, SupabaseSettings, SupabaseStore};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("Learning Path AI (Rust)")
        .version("0.1.0")
        .about("AI-assisted learning path generation service")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("ADDR")
                .help("Bind address for the HTTP server"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port for the HTTP server"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");

    // Initialize logging
    let filter = if verbose {
        "learning_path_ai=debug,info"
    } else {
        "learning_path_ai=info,warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    // CLI flags win over file and environment settings
    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }
    if let Some(port) = matches.get_one::<String>("port") {
        config.server.port = port.parse().unwrap_or(config.server.port);
    }

    config.validate()?;

    info!("🚀 Learning Path AI (Rust) starting...");
    info!("{}", config.summary());

    // Text model; requests fall back to deterministic content without one
    let model_config = ModelConfig {
        provider: config.generator.provider.clone(),
        api_key: config.generator.api_key.clone(),
        model: config.generator.model.clone(),
        max_output_tokens: config.generator.max_output_tokens,
        temperature: config.generator.temperature,
        timeout_seconds: config.generator.timeout_seconds,
    };
    let model: Option<Box<dyn TextModel>> = match create_model(&model_config) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!("Text model unavailable: {}, serving fallback content", e);
            None
        }
    };
    if let Some(model) = &model {
        if !model.is_available().await {
            warn!("Model endpoint not reachable, responses will use fallback content");
        }
    }
    let generator = ContentGenerator::new(model);

    // Video search; degrades to empty results without an API key
    let search_settings = SearchSettings {
        api_key: config.youtube.api_key.clone(),
        endpoint: config.youtube.endpoint.clone(),
        timeout_seconds: config.youtube.timeout_seconds,
    };
    let search_client = YouTubeSearchClient::new(search_settings)?;
    let enhancer = RecommendationEnhancer::new(Arc::new(search_client));

    // Storage; in-memory unless Supabase credentials are configured
    let supabase_settings = SupabaseSettings {
        url: config.storage.supabase_url.clone(),
        key: config.storage.supabase_key.clone(),
        table: config.storage.table.clone(),
        timeout_seconds: config.storage.timeout_seconds,
    };
    let store: Arc<dyn PathStore> = match SupabaseStore::new(supabase_settings) {
        Ok(store) => {
            info!("💾 Using Supabase storage");
            Arc::new(store)
        }
        Err(_) => {
            warn!("Supabase credentials not configured, using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let metrics = Arc::new(ServiceMetrics::new());
    let assembler = Arc::new(PathAssembler::new(
        generator,
        enhancer,
        store.clone(),
        metrics.clone(),
    ));

    let server = ApiServer::new(
        assembler,
        store,
        metrics,
        config.server.host.clone(),
        config.server.port,
    );
    server.start().await
}
