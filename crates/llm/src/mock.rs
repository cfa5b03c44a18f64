//! Mock LLM service for local development and testing

use crate::{LlmError, LlmService};

/// Mock LLM service
///
/// Echoes the incoming message instead of calling a real model, so the
/// chat API can be exercised without an API key.
pub struct MockLlmService;

impl MockLlmService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockLlmService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn generate_response(&self, message: &str) -> Result<String, LlmError> {
        tracing::info!(message = %message, "Mock LLM would generate a response");
        Ok(format!("Mock response to: {}", message))
    }
}
