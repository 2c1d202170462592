//! Telegram webhook bot that answers `/start` with a reply keyboard and
//! echoes every other text message back to its chat.

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::errors::{BotError, ConfigError, DecodeError, DispatchError};
pub use application::messaging::{Branch, ResponseDispatcher, UpdateDecoder};
pub use application::services::{Outcome, UpdateService};
pub use domain::entities::{Button, Chat, KeyboardMarkup, Message, OutboundMessage, Update};
pub use domain::traits::MessageSender;
pub use infrastructure::config::Config;
