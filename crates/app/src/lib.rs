//! CookBot application composition root
//!
//! Composes the domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use cookbot_chat::{ChatFacade, ChatState};
use cookbot_llm::{LlmConfig, LlmServiceFactory};

/// Create the main application router with all routes and middleware
pub fn create_app(llm_config: LlmConfig) -> Result<Router, anyhow::Error> {
    // Create LLM service from configuration
    let llm_service = LlmServiceFactory::create(llm_config)?;

    // Create Chat domain state
    let chat_state = ChatState {
        chat: Arc::new(ChatFacade::new(Arc::from(llm_service))),
    };

    // Build router with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "CookBot Server v0.0.1-SNAPSHOT" }),
        )
        .merge(cookbot_chat::routes().with_state(chat_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
