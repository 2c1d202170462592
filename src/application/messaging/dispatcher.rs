//! Response dispatcher - Picks the reply for an update and sends it

use std::sync::Arc;
use crate::domain::entities::{Update, OutboundMessage, KeyboardMarkup, Button};
use crate::domain::traits::MessageSender;
use crate::application::errors::DispatchError;

/// Command that answers with the keyboard instead of an echo
pub const START_COMMAND: &str = "/start";

/// Text sent together with the keyboard
pub const KEYBOARD_PROMPT: &str = "Please select an option:";

/// Prefix of every echoed reply
pub const ECHO_PREFIX: &str = "Your message: ";

/// Which reply an update produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Keyboard,
    Echo,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Keyboard => "keyboard",
            Branch::Echo => "echo",
        }
    }
}

/// Branch taken for an update and what the single send returned
#[derive(Debug)]
pub struct Dispatched {
    pub branch: Branch,
    /// Raw Telegram response body, kept for logging only
    pub result: Result<String, DispatchError>,
}

/// Routes decoded updates to exactly one outbound message
pub struct ResponseDispatcher {
    sender: Arc<dyn MessageSender>,
}

impl ResponseDispatcher {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// The two-row keyboard offered on `/start`
    pub fn start_keyboard() -> KeyboardMarkup {
        KeyboardMarkup::new(vec![
            vec![Button::new("Button 1"), Button::new("Button 2")],
            vec![
                Button::new("Button 3"),
                Button::new("Button 4"),
                Button::new("Button 5"),
                Button::new("Button 6"),
            ],
        ])
        .resized()
    }

    pub fn branch(update: &Update) -> Branch {
        if update.text() == START_COMMAND {
            Branch::Keyboard
        } else {
            Branch::Echo
        }
    }

    /// Build the reply for an update without sending it
    pub fn plan(&self, update: &Update) -> OutboundMessage {
        self.plan_branch(Self::branch(update), update)
    }

    fn plan_branch(&self, branch: Branch, update: &Update) -> OutboundMessage {
        let chat_id = update.chat_id();
        match branch {
            Branch::Keyboard => {
                OutboundMessage::text(chat_id, KEYBOARD_PROMPT).with_keyboard(Self::start_keyboard())
            }
            Branch::Echo => OutboundMessage::text(chat_id, format!("{}{}", ECHO_PREFIX, update.text())),
        }
    }

    /// Send the reply. Exactly one call to the sender, no fallback.
    pub async fn dispatch(&self, update: &Update) -> Dispatched {
        let branch = Self::branch(update);
        let message = self.plan_branch(branch, update);
        tracing::debug!(
            "Dispatching {} reply to chat {}: {}",
            branch.as_str(),
            message.chat_id,
            message.text
        );

        let result = self.sender.send_message(&message).await;
        Dispatched { branch, result }
    }
}
