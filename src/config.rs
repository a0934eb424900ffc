use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::llm::ModelProvider;

/// Configuration for the Learning Path AI service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Content generation settings
    pub generator: GeneratorConfig,

    /// YouTube search settings
    pub youtube: YouTubeConfig,

    /// Learning path storage settings
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server
    pub host: String,

    /// Port for the HTTP server
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Text model provider to use
    pub provider: ModelProvider,

    /// API key for the selected provider
    pub api_key: Option<String>,

    /// Model to use for generation
    pub model: String,

    /// Maximum tokens to generate
    pub max_output_tokens: u32,

    /// Temperature for generation (0.0 = deterministic)
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// YouTube Data API key
    pub api_key: Option<String>,

    /// Search endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Supabase project URL
    pub supabase_url: Option<String>,

    /// Supabase API key
    pub supabase_key: Option<String>,

    /// Table holding learning path rows
    pub table: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        // Try to load from various locations
        let config_paths = ["learning-path.toml", "config/learning-path.toml"];

        for path in &config_paths {
            if let Ok(config_str) = std::fs::read_to_string(path) {
                match toml::from_str(&config_str) {
                    Ok(config) => {
                        tracing::info!("📄 Loaded configuration from: {}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to environment variables
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(provider) = std::env::var("LEARNING_PATH_PROVIDER") {
            match provider.to_lowercase().as_str() {
                "gemini" => config.generator.provider = ModelProvider::Gemini,
                "openai" => config.generator.provider = ModelProvider::OpenAI,
                other => tracing::warn!("Unknown model provider: {}, keeping default", other),
            }
        }

        let key_var = match config.generator.provider {
            ModelProvider::Gemini => "GOOGLE_API_KEY",
            ModelProvider::OpenAI => "OPENAI_API_KEY",
        };
        if let Ok(api_key) = std::env::var(key_var) {
            config.generator.api_key = Some(api_key);
        }

        if let Ok(model) = std::env::var("LEARNING_PATH_MODEL") {
            config.generator.model = model;
        }

        if let Ok(api_key) = std::env::var("YOUTUBE_API_KEY") {
            config.youtube.api_key = Some(api_key);
        }

        if let Ok(url) = std::env::var("SUPABASE_URL") {
            config.storage.supabase_url = Some(url);
        }

        if let Ok(key) = std::env::var("SUPABASE_KEY") {
            config.storage.supabase_key = Some(key);
        }

        if let Ok(host) = std::env::var("LEARNING_PATH_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("LEARNING_PATH_PORT") {
            config.server.port = port.parse().unwrap_or(8000);
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("server port must be greater than 0"));
        }

        if self.generator.max_output_tokens == 0 {
            return Err(anyhow!("max_output_tokens must be greater than 0"));
        }

        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(anyhow!("temperature must be between 0.0 and 2.0"));
        }

        if self.generator.timeout_seconds == 0 || self.youtube.timeout_seconds == 0 {
            return Err(anyhow!("request timeouts must be greater than 0"));
        }

        if self.storage.table.is_empty() {
            return Err(anyhow!("storage table must not be empty"));
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }

    /// Get runtime configuration summary; never includes key material
    pub fn summary(&self) -> String {
        format!(
            "Learning Path AI Configuration:\n\
            - Server: {}:{}\n\
            - Model Provider: {:?}\n\
            - Model: {}\n\
            - Model API Key: {}\n\
            - YouTube API Key: {}\n\
            - Supabase: {}",
            self.server.host,
            self.server.port,
            self.generator.provider,
            self.generator.model,
            configured(&self.generator.api_key),
            configured(&self.youtube.api_key),
            configured(&self.storage.supabase_url),
        )
    }
}

fn configured(value: &Option<String>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "configured",
        _ => "not configured",
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            generator: GeneratorConfig {
                provider: ModelProvider::Gemini,
                api_key: None,
                model: "gemini-1.5-flash".to_string(),
                max_output_tokens: 8192,
                temperature: 0.7,
                timeout_seconds: 90, // generation of a full path is slow
            },
            youtube: YouTubeConfig {
                api_key: None,
                endpoint: "https://www.googleapis.com/youtube/v3/search".to_string(),
                timeout_seconds: 10,
            },
            storage: StorageConfig {
                supabase_url: None,
                supabase_key: None,
                table: "learning_paths".to_string(),
                timeout_seconds: 30,
            },
        }
    }
}

/// Configuration builder for programmatic config creation
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.config.server.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_provider(mut self, provider: ModelProvider) -> Self {
        self.config.generator.provider = provider;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.config.generator.model = model;
        self
    }

    pub fn with_model_api_key(mut self, api_key: String) -> Self {
        self.config.generator.api_key = Some(api_key);
        self
    }

    pub fn with_youtube_api_key(mut self, api_key: String) -> Self {
        self.config.youtube.api_key = Some(api_key);
        self
    }

    pub fn with_supabase(mut self, url: String, key: String) -> Self {
        self.config.storage.supabase_url = Some(url);
        self.config.storage.supabase_key = Some(key);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.generator.provider, ModelProvider::Gemini);
        assert_eq!(config.generator.model, "gemini-1.5-flash");
        assert_eq!(config.storage.table, "learning_paths");
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .with_port(9000)
            .with_provider(ModelProvider::OpenAI)
            .with_model("gpt-4o-mini".to_string())
            .build();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.generator.provider, ModelProvider::OpenAI);
        assert_eq!(config.generator.model, "gpt-4o-mini");
    }

    #[test]
    fn test_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.generator.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_never_prints_keys() {
        let config = ConfigBuilder::new()
            .with_model_api_key("secret-model-key".to_string())
            .with_youtube_api_key("secret-youtube-key".to_string())
            .build();

        let summary = config.summary();
        assert!(!summary.contains("secret-model-key"));
        assert!(!summary.contains("secret-youtube-key"));
        assert!(summary.contains("configured"));
    }
}
