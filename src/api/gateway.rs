//! Gateway seam between the UI and whatever serves the data
//!
//! Queries fetch records, commands mutate them. The UI never calls a gateway
//! directly; requests go through `services::api` so the event loop never
//! waits on one.

use async_trait::async_trait;
use thiserror::Error;

use super::types::{
    CalendarEvent, CalendarEventPatch, Candidate, Conversation, Decision, Job, Message,
    NewCalendarEvent, User, UserType,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with email {0} already exists")]
    AccountExists(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        GatewayError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Account creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, GatewayError>;

    async fn signup(&self, request: SignupRequest) -> Result<User, GatewayError>;

    /// Candidates for a recruiting role that have not been decided yet
    async fn fetch_candidates(&self, pool: UserType) -> Result<Vec<Candidate>, GatewayError>;

    /// Record an accept/reject decision for a candidate in a pool
    async fn record_decision(
        &self,
        pool: UserType,
        candidate_id: &str,
        decision: Decision,
    ) -> Result<(), GatewayError>;

    async fn fetch_recommended_jobs(&self) -> Result<Vec<Job>, GatewayError>;

    async fn fetch_conversations(&self, user_id: &str) -> Result<Vec<Conversation>, GatewayError>;

    async fn fetch_messages(&self, conversation_id: &str) -> Result<Vec<Message>, GatewayError>;

    /// Send a message; returns the id of the conversation it landed in
    async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<(String, Message), GatewayError>;

    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, GatewayError>;

    async fn add_event(&self, event: NewCalendarEvent) -> Result<CalendarEvent, GatewayError>;

    async fn update_event(
        &self,
        id: &str,
        patch: CalendarEventPatch,
    ) -> Result<CalendarEvent, GatewayError>;

    async fn delete_event(&self, id: &str) -> Result<(), GatewayError>;
}
