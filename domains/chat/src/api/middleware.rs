//! Chat domain state

use std::sync::Arc;

use crate::application::ChatUseCase;

/// Application state for the Chat domain
#[derive(Clone)]
pub struct ChatState {
    pub chat: Arc<dyn ChatUseCase>,
}
