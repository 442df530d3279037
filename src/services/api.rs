use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{
    CalendarEvent, CalendarEventPatch, Candidate, Conversation, Decision, Gateway, GatewayError,
    Job, Message, NewCalendarEvent, SignupRequest, User, UserType,
};

/// Priority level for API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,   // User-initiated actions (sign in, decisions, sends, edits)
    Medium, // Data for the screen being shown
    Low,    // Prefetching for other tabs
}

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Candidates(UserType),
    Jobs,
    Conversations(String),
    Messages(String),
    Events,
    /// Commands never deduplicate; each gets its own sequence number
    Command(u64),
}

impl RequestKey {
    fn is_query(&self) -> bool {
        !matches!(self, RequestKey::Command(_))
    }
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    Login {
        email: String,
        password: String,
    },

    Signup(SignupRequest),

    /// Candidates not yet decided for a recruiting pool
    FetchCandidates { pool: UserType },

    RecordDecision {
        pool: UserType,
        candidate_id: String,
        decision: Decision,
    },

    FetchJobs,

    FetchConversations {
        user_id: String,
        priority: Priority,
    },

    FetchMessages { conversation_id: String },

    SendMessage {
        sender_id: String,
        receiver_id: String,
        content: String,
        /// Title for the conversation if the gateway creates one
        title: String,
    },

    FetchEvents,

    AddEvent(NewCalendarEvent),

    UpdateEvent {
        id: String,
        patch: CalendarEventPatch,
    },

    DeleteEvent { id: String },
}

impl ApiRequest {
    /// Extract priority from request
    fn priority(&self) -> Priority {
        match self {
            ApiRequest::FetchConversations { priority, .. } => *priority,
            ApiRequest::FetchCandidates { .. }
            | ApiRequest::FetchJobs
            | ApiRequest::FetchMessages { .. }
            | ApiRequest::FetchEvents => Priority::Medium,
            _ => Priority::High,
        }
    }

    /// Generate a unique key for deduplication
    fn key(&self, command_seq: u64) -> RequestKey {
        match self {
            ApiRequest::FetchCandidates { pool } => RequestKey::Candidates(*pool),
            ApiRequest::FetchJobs => RequestKey::Jobs,
            ApiRequest::FetchConversations { user_id, .. } => {
                RequestKey::Conversations(user_id.clone())
            }
            ApiRequest::FetchMessages { conversation_id } => {
                RequestKey::Messages(conversation_id.clone())
            }
            ApiRequest::FetchEvents => RequestKey::Events,
            _ => RequestKey::Command(command_seq),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => "login",
            ApiRequest::Signup(_) => "signup",
            ApiRequest::FetchCandidates { .. } => "fetch_candidates",
            ApiRequest::RecordDecision { .. } => "record_decision",
            ApiRequest::FetchJobs => "fetch_jobs",
            ApiRequest::FetchConversations { .. } => "fetch_conversations",
            ApiRequest::FetchMessages { .. } => "fetch_messages",
            ApiRequest::SendMessage { .. } => "send_message",
            ApiRequest::FetchEvents => "fetch_events",
            ApiRequest::AddEvent(_) => "add_event",
            ApiRequest::UpdateEvent { .. } => "update_event",
            ApiRequest::DeleteEvent { .. } => "delete_event",
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    LoginResult {
        user: Result<User, GatewayError>,
    },

    SignupResult {
        user: Result<User, GatewayError>,
    },

    CandidatesResult {
        pool: UserType,
        candidates: Result<Vec<Candidate>, GatewayError>,
    },

    DecisionResult {
        candidate_id: String,
        decision: Decision,
        result: Result<(), GatewayError>,
    },

    JobsResult {
        jobs: Result<Vec<Job>, GatewayError>,
    },

    ConversationsResult {
        user_id: String,
        conversations: Result<Vec<Conversation>, GatewayError>,
    },

    MessagesResult {
        conversation_id: String,
        messages: Result<Vec<Message>, GatewayError>,
    },

    MessageSent {
        title: String,
        sent: Result<(String, Message), GatewayError>,
    },

    EventsResult {
        events: Result<Vec<CalendarEvent>, GatewayError>,
    },

    EventSaved {
        /// True for a new event, false for an update
        created: bool,
        event: Result<CalendarEvent, GatewayError>,
    },

    EventDeleted {
        id: String,
        result: Result<(), GatewayError>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that processes requests in the background
pub struct ApiService {
    gateway: Arc<dyn Gateway>,
    request_queue: VecDeque<(ApiRequest, Priority, RequestKey)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
    command_seq: u64,
}

impl ApiService {
    pub(crate) fn new(
        gateway: Arc<dyn Gateway>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            gateway,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4, // Limit concurrent gateway calls
            command_seq: 0,
        }
    }

    /// Add a request to the queue
    ///
    /// A query identical to one already queued or in flight is dropped; its
    /// answer is on the way.
    fn enqueue(&mut self, request: ApiRequest) {
        self.command_seq += 1;
        let key = request.key(self.command_seq);

        if key.is_query()
            && (self.in_flight.contains(&key)
                || self.request_queue.iter().any(|(_, _, k)| *k == key))
        {
            tracing::debug!("API service: dropping duplicate {:?}", key);
            return;
        }

        let priority = request.priority();

        // Insert based on priority (high priority at front)
        let insert_pos = self
            .request_queue
            .iter()
            .position(|(_, p, _)| *p > priority)
            .unwrap_or(self.request_queue.len());

        self.request_queue.insert(insert_pos, (request, priority, key));
    }

    /// Process the next request from the queue
    fn process_next(&mut self) {
        if self.in_flight.len() >= self.max_concurrent {
            return; // At capacity, wait for some to complete
        }

        let Some((request, _, key)) = self.request_queue.pop_front() else {
            return; // Queue is empty
        };

        self.in_flight.insert(key.clone());

        let gateway = Arc::clone(&self.gateway);
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let name = request.name();
            tracing::debug!("API service: start {}", name);

            let response = Self::execute_request(gateway.as_ref(), request).await;
            tracing::debug!("API service: done {}", name);

            let _ = response_tx.send(response);

            // Notify service that this request is complete
            let _ = completion_tx.send(InternalMessage::Completed(key));
        });
    }

    /// Execute a request against the gateway and wrap the answer
    async fn execute_request(gateway: &dyn Gateway, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Login { email, password } => ApiResponse::LoginResult {
                user: gateway.login(&email, &password).await,
            },

            ApiRequest::Signup(signup) => ApiResponse::SignupResult {
                user: gateway.signup(signup).await,
            },

            ApiRequest::FetchCandidates { pool } => ApiResponse::CandidatesResult {
                pool,
                candidates: gateway.fetch_candidates(pool).await,
            },

            ApiRequest::RecordDecision {
                pool,
                candidate_id,
                decision,
            } => {
                let result = gateway.record_decision(pool, &candidate_id, decision).await;
                ApiResponse::DecisionResult {
                    candidate_id,
                    decision,
                    result,
                }
            }

            ApiRequest::FetchJobs => ApiResponse::JobsResult {
                jobs: gateway.fetch_recommended_jobs().await,
            },

            ApiRequest::FetchConversations { user_id, .. } => {
                let conversations = gateway.fetch_conversations(&user_id).await;
                ApiResponse::ConversationsResult {
                    user_id,
                    conversations,
                }
            }

            ApiRequest::FetchMessages { conversation_id } => {
                let messages = gateway.fetch_messages(&conversation_id).await;
                ApiResponse::MessagesResult {
                    conversation_id,
                    messages,
                }
            }

            ApiRequest::SendMessage {
                sender_id,
                receiver_id,
                content,
                title,
            } => ApiResponse::MessageSent {
                title,
                sent: gateway.send_message(&sender_id, &receiver_id, &content).await,
            },

            ApiRequest::FetchEvents => ApiResponse::EventsResult {
                events: gateway.fetch_events().await,
            },

            ApiRequest::AddEvent(event) => ApiResponse::EventSaved {
                created: true,
                event: gateway.add_event(event).await,
            },

            ApiRequest::UpdateEvent { id, patch } => ApiResponse::EventSaved {
                created: false,
                event: gateway.update_event(&id, patch).await,
            },

            ApiRequest::DeleteEvent { id } => {
                let result = gateway.delete_event(&id).await;
                ApiResponse::EventDeleted { id, result }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    gateway: Arc<dyn Gateway>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(gateway, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                // Receive new requests; stop once every sender is gone
                request = request_rx.recv() => match request {
                    Some(request) => service.enqueue(request),
                    None => break,
                },

                // Handle completion notifications
                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                // Process queue at regular intervals
                _ = tick.tick() => {
                    // Process multiple requests per tick if queue has items
                    for _ in 0..5 {
                        if service.request_queue.is_empty() {
                            break;
                        }
                        service.process_next();
                    }
                }
            }
        }

        tracing::debug!("API service: request channel closed, stopping");
    });

    (request_tx, response_rx)
}
