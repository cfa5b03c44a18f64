//! Route definitions for the Chat domain API

use axum::{routing::post, Router};

use super::handlers::chat;
use super::middleware::ChatState;

/// Create all Chat domain API routes
pub fn routes() -> Router<ChatState> {
    Router::new().route("/api/chat/send", post(chat::send_message))
}
