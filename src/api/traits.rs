use async_trait::async_trait;

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse};

/// Remote endpoint that answers chat turns
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one turn and wait for the reply
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}
