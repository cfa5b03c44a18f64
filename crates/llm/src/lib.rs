//! CookBot LLM service
//!
//! Provides the text-generation capability behind the chat API with support
//! for:
//! - OpenAI Chat Completions integration for production
//! - Mock service for testing and development

use thiserror::Error;

pub mod mock;
pub mod openai;

pub use mock::MockLlmService;
pub use openai::OpenAiService;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM configuration error: {0}")]
    Configuration(String),

    #[error("LLM request error: {0}")]
    Request(String),

    #[error("LLM response error: {0}")]
    Response(String),

    #[error("LLM rate limit exceeded")]
    RateLimit,
}

/// LLM service configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// LLM provider backing the service (openai, mock)
    pub provider: String,
    /// API key for the provider
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL override (for proxies and test servers)
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Create LLM config from environment variables
    pub fn from_env() -> Result<Self, LlmError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string());
        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let base_url = std::env::var("OPENAI_BASE_URL").ok();

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
        })
    }
}

/// Capability interface for generating a reply to a single chat message.
///
/// Production and test implementations both satisfy this trait; consumers
/// hold it as a trait object and stay decoupled from any provider.
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Generate the model's reply for the given user message
    async fn generate_response(&self, message: &str) -> Result<String, LlmError>;
}

/// LLM service factory
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create an LLM service based on configuration
    pub fn create(config: LlmConfig) -> Result<Box<dyn LlmService>, LlmError> {
        match config.provider.as_str() {
            "openai" => {
                if config.api_key.is_empty() {
                    return Err(LlmError::Configuration(
                        "OPENAI_API_KEY is required for the openai provider".to_string(),
                    ));
                }
                tracing::info!(model = %config.model, "Creating OpenAI LLM service");
                Ok(Box::new(OpenAiService::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock LLM service");
                Ok(Box::new(MockLlmService::new()))
            }
            provider => Err(LlmError::Configuration(format!(
                "Unknown LLM provider: {}. Supported providers: openai, mock",
                provider
            ))),
        }
    }
}
