//! Application layer for the Chat domain
//!
//! The HTTP handlers talk to the domain through [`ChatUseCase`]; the
//! production implementation is [`ChatFacade`].

pub mod facade;

use chrono::{DateTime, Utc};
use cookbot_llm::LlmError;

pub use facade::ChatFacade;

/// Command for sending a chat message
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageCommand {
    /// Message text to forward to the model
    pub message: String,
    /// Caller-supplied user identifier (carried, not interpreted)
    pub user_id: String,
}

/// Result of a completed chat exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// Generated reply text
    pub message: String,
    /// When the reply was produced
    pub timestamp: DateTime<Utc>,
}

/// Inbound port for the chat use case
#[async_trait::async_trait]
pub trait ChatUseCase: Send + Sync {
    /// Forward a message to the model and return the stamped reply
    async fn send_message(&self, command: SendMessageCommand) -> Result<ChatResponse, LlmError>;
}
