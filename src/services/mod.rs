//! External Services
//!
//! This module contains services that run off the UI loop:
//! - api: prioritized gateway request queue

pub mod api;

// Re-export commonly used types for convenience
pub use api::{spawn_api_service, ApiRequest, ApiResponse, Priority};
