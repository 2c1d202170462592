//! Message handling - Decoding inbound updates and choosing replies

pub mod decoder;
pub mod dispatcher;

pub use decoder::UpdateDecoder;
pub use dispatcher::{Branch, Dispatched, ResponseDispatcher};
