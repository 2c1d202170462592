//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Platform integrations (Telegram)
//! - Server: Webhook HTTP endpoint

pub mod config;
pub mod adapters;
pub mod server;
