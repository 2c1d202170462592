use async_trait::async_trait;
use crate::domain::entities::OutboundMessage;
use crate::application::errors::DispatchError;

/// Outbound side of the bot - abstraction over the messaging platform API
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send one message and return the raw response body
    async fn send_message(&self, message: &OutboundMessage) -> Result<String, DispatchError>;
}
