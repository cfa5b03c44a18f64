//! Chat API handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cookbot_common::{AppJson, Error, Result};

use crate::api::middleware::ChatState;
use crate::application::{ChatResponse, SendMessageCommand};

/// Request for sending a chat message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Message text
    pub message: String,
    /// Caller-supplied user identifier
    pub user_id: String,
}

/// Chat response DTO
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatResponse> for SendMessageResponse {
    fn from(r: ChatResponse) -> Self {
        Self {
            message: r.message,
            timestamp: r.timestamp,
        }
    }
}

/// Send a chat message and return the generated reply
pub async fn send_message(
    State(state): State<ChatState>,
    AppJson(req): AppJson<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>> {
    let command = SendMessageCommand {
        message: req.message,
        user_id: req.user_id,
    };

    let response = state
        .chat
        .send_message(command)
        .await
        .map_err(|e| Error::Internal(format!("Chat model error: {}", e)))?;

    Ok(Json(response.into()))
}
