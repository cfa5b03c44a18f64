//! Chat domain: recipe chat facade over the LLM service

pub mod api;
pub mod application;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ChatMessage, ChatRole};

// Re-export application types
pub use application::{ChatFacade, ChatResponse, ChatUseCase, SendMessageCommand};

// Re-export API types
pub use api::routes;
pub use api::ChatState;
