//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: responses from the gateway background service
//! - keyboard: user keyboard input
//! - mouse: card drags on the candidate deck
//!
//! Handlers are free functions that take &mut App and process one event.

pub mod api;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
