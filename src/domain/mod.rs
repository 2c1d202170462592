//! Domain layer - Core types with no I/O
//! 
//! This layer contains:
//! - Entities: Inbound updates and outbound messages
//! - Traits: Abstractions for infrastructure (MessageSender)

pub mod entities;
pub mod traits;
