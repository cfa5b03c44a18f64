//! Chat facade: the production [`ChatUseCase`] implementation

use std::sync::Arc;

use cookbot_common::{Clock, SystemClock};
use cookbot_llm::{LlmError, LlmService};

use super::{ChatResponse, ChatUseCase, SendMessageCommand};

/// Chat facade
///
/// Forwards the message text to the LLM service verbatim and stamps the
/// reply with the current time. Model failures pass through untouched so
/// the API layer decides how to present them.
pub struct ChatFacade {
    model: Arc<dyn LlmService>,
    clock: Arc<dyn Clock>,
}

impl ChatFacade {
    /// Create a facade backed by the wall clock
    pub fn new(model: Arc<dyn LlmService>) -> Self {
        Self::with_clock(model, Arc::new(SystemClock))
    }

    /// Create a facade with an explicit time source
    pub fn with_clock(model: Arc<dyn LlmService>, clock: Arc<dyn Clock>) -> Self {
        Self { model, clock }
    }
}

#[async_trait::async_trait]
impl ChatUseCase for ChatFacade {
    async fn send_message(&self, command: SendMessageCommand) -> Result<ChatResponse, LlmError> {
        tracing::debug!(user_id = %command.user_id, "Forwarding chat message to the model");

        let message = self.model.generate_response(&command.message).await?;

        Ok(ChatResponse {
            message,
            timestamp: self.clock.now(),
        })
    }
}
