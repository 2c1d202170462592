use std::sync::Arc;
use crate::application::messaging::{Branch, ResponseDispatcher, UpdateDecoder};
use crate::domain::traits::MessageSender;

/// Terminal state of one webhook request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent(Branch),
    DecodeFailed,
    SendFailed(Branch),
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Sent(_) => "sent",
            Outcome::DecodeFailed => "decode_failed",
            Outcome::SendFailed(_) => "send_failed",
        }
    }
}

/// Service for processing webhook bodies: decode, then dispatch
pub struct UpdateService {
    decoder: UpdateDecoder,
    dispatcher: ResponseDispatcher,
}

impl UpdateService {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self {
            decoder: UpdateDecoder::new(),
            dispatcher: ResponseDispatcher::new(sender),
        }
    }

    /// Handle one raw body. Every failure ends here as a logged outcome.
    pub async fn handle(&self, body: &[u8]) -> Outcome {
        tracing::info!("Got request, trying to parse ({} bytes)", body.len());

        let update = match self.decoder.decode(body) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!("Could not decode incoming update: {}", e);
                return Outcome::DecodeFailed;
            }
        };
        tracing::info!("Parsed update {} from chat {}", update.update_id, update.chat_id());

        let dispatched = self.dispatcher.dispatch(&update).await;
        let branch = dispatched.branch;
        match dispatched.result {
            Ok(response) => {
                tracing::info!("{} reply sent to chat {}", branch.as_str(), update.chat_id());
                tracing::debug!("Body of Telegram response: {}", response);
                Outcome::Sent(branch)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send {} reply to chat {}: {}",
                    branch.as_str(),
                    update.chat_id(),
                    e
                );
                Outcome::SendFailed(branch)
            }
        }
    }
}
