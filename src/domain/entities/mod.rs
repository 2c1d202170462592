//! Domain entities - Request-scoped shapes exchanged with Telegram

pub mod update;
pub mod outbound;

pub use update::{Update, Message, Chat};
pub use outbound::{OutboundMessage, KeyboardMarkup, Button};
