use serde::{Deserialize, Serialize};

/// One inbound event pushed by Telegram to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Message,
}

/// Text message carried by an update
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub text: String,
    pub chat: Chat,
}

/// Conversation a message belongs to; replies are addressed to its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    pub fn new(update_id: i64, chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            update_id,
            message: Message {
                text: text.into(),
                chat: Chat { id: chat_id },
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.message.text
    }

    pub fn chat_id(&self) -> i64 {
        self.message.chat.id
    }
}
