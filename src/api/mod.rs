//! Backend access
//!
//! - types: domain records exchanged with the backend
//! - gateway: the `Gateway` trait (queries and commands) and its error type
//! - mock: in-memory `MockGateway` with fixed latency and fixture data

pub mod gateway;
pub mod mock;
pub mod types;

pub use gateway::{Gateway, GatewayError, SignupRequest};
pub use mock::MockGateway;
pub use types::*;
