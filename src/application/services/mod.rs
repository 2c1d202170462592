//! Application services - Business logic orchestration

pub mod update_service;

pub use update_service::{Outcome, UpdateService};
