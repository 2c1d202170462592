//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Errors: Decode, dispatch and configuration errors
//! - Messaging: Update decoding, reply dispatching
//! - Services: The per-request update pipeline

pub mod errors;
pub mod services;
pub mod messaging;
