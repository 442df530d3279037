//! In-memory gateway used by the app and as a test double
//!
//! Every call sleeps for the configured latency before touching state, the
//! same way a slow backend would behave.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

use super::gateway::{Gateway, GatewayError, SignupRequest};
use super::types::{
    CalendarEvent, CalendarEventPatch, Candidate, Conversation, Decision, Job, Message,
    NewCalendarEvent, User, UserType,
};
use crate::logic::messages::apply_sent_message;

/// Id of the account returned for logins without a registered account
pub const DEMO_USER_ID: &str = "1";

#[derive(Default)]
struct MockState {
    accounts: HashMap<String, (String, User)>,
    decisions: HashMap<UserType, HashMap<String, Decision>>,
    inboxes: HashMap<String, Vec<Conversation>>,
    messages: HashMap<String, Vec<Message>>,
    events: Option<Vec<CalendarEvent>>,
    outage: Option<String>,
}

impl MockState {
    fn check_outage(&self) -> Result<(), GatewayError> {
        match &self.outage {
            Some(reason) => Err(GatewayError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn inbox(&mut self, user_id: &str) -> &mut Vec<Conversation> {
        if !self.inboxes.contains_key(user_id) {
            let (conversations, threads) = fixture_inbox(user_id);
            self.messages.extend(threads);
            self.inboxes.insert(user_id.to_string(), conversations);
        }
        self.inboxes.entry(user_id.to_string()).or_default()
    }

    fn events(&mut self) -> &mut Vec<CalendarEvent> {
        self.events.get_or_insert_with(fixture_events)
    }
}

pub struct MockGateway {
    latency: Duration,
    state: Mutex<MockState>,
}

impl MockGateway {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            state: Mutex::new(MockState::default()),
        }
    }

    /// Gateway without simulated latency
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Make every following call fail with `Unavailable` until cleared
    pub async fn set_outage(&self, reason: Option<String>) {
        self.state.lock().await.outage = reason;
    }

    /// Decisions recorded so far for a pool
    pub async fn decisions(&self, pool: UserType) -> HashMap<String, Decision> {
        self.state
            .lock()
            .await
            .decisions
            .get(&pool)
            .cloned()
            .unwrap_or_default()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn login(&self, email: &str, password: &str) -> Result<User, GatewayError> {
        self.simulate_latency().await;
        let state = self.state.lock().await;
        state.check_outage()?;

        let key = email.trim().to_lowercase();
        match state.accounts.get(&key) {
            Some((stored, user)) if stored == password => Ok(user.clone()),
            Some(_) => Err(GatewayError::InvalidCredentials),
            None => Ok(User {
                id: DEMO_USER_ID.to_string(),
                email: email.trim().to_string(),
                name: "Jordan Avery".to_string(),
                user_type: UserType::Individual,
                profile_completed: false,
                profile_image: None,
            }),
        }
    }

    async fn signup(&self, request: SignupRequest) -> Result<User, GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        let key = request.email.trim().to_lowercase();
        if state.accounts.contains_key(&key) {
            return Err(GatewayError::AccountExists(request.email));
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: request.email.trim().to_string(),
            name: request.name.trim().to_string(),
            user_type: request.user_type,
            profile_completed: false,
            profile_image: None,
        };
        state
            .accounts
            .insert(key, (request.password, user.clone()));
        Ok(user)
    }

    async fn fetch_candidates(&self, pool: UserType) -> Result<Vec<Candidate>, GatewayError> {
        self.simulate_latency().await;
        let state = self.state.lock().await;
        state.check_outage()?;

        let decided = state.decisions.get(&pool);
        Ok(fixture_candidates(pool)
            .into_iter()
            .filter(|c| decided.map_or(true, |d| !d.contains_key(&c.id)))
            .collect())
    }

    async fn record_decision(
        &self,
        pool: UserType,
        candidate_id: &str,
        decision: Decision,
    ) -> Result<(), GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        if !fixture_candidates(pool).iter().any(|c| c.id == candidate_id) {
            return Err(GatewayError::not_found("Candidate", candidate_id));
        }
        state
            .decisions
            .entry(pool)
            .or_default()
            .insert(candidate_id.to_string(), decision);
        Ok(())
    }

    async fn fetch_recommended_jobs(&self) -> Result<Vec<Job>, GatewayError> {
        self.simulate_latency().await;
        let state = self.state.lock().await;
        state.check_outage()?;
        Ok(fixture_jobs())
    }

    async fn fetch_conversations(&self, user_id: &str) -> Result<Vec<Conversation>, GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;
        Ok(state.inbox(user_id).clone())
    }

    async fn fetch_messages(&self, conversation_id: &str) -> Result<Vec<Message>, GatewayError> {
        self.simulate_latency().await;
        let state = self.state.lock().await;
        state.check_outage()?;
        Ok(state
            .messages
            .get(conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        content: &str,
    ) -> Result<(String, Message), GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            read: false,
        };

        let title = contact_name(receiver_id).to_string();
        let conversation_id = apply_sent_message(state.inbox(sender_id), &message, &title);
        state
            .messages
            .entry(conversation_id.clone())
            .or_default()
            .push(message.clone());

        Ok((conversation_id, message))
    }

    async fn fetch_events(&self) -> Result<Vec<CalendarEvent>, GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;
        Ok(state.events().clone())
    }

    async fn add_event(&self, event: NewCalendarEvent) -> Result<CalendarEvent, GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        let event = event.with_id(uuid::Uuid::new_v4().to_string());
        state.events().push(event.clone());
        Ok(event)
    }

    async fn update_event(
        &self,
        id: &str,
        patch: CalendarEventPatch,
    ) -> Result<CalendarEvent, GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        let event = state
            .events()
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GatewayError::not_found("Event", id))?;
        patch.apply(event);
        Ok(event.clone())
    }

    async fn delete_event(&self, id: &str) -> Result<(), GatewayError> {
        self.simulate_latency().await;
        let mut state = self.state.lock().await;
        state.check_outage()?;

        let events = state.events();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(GatewayError::not_found("Event", id));
        }
        Ok(())
    }
}

// ============================================
// FIXTURES
// ============================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn contact_name(participant_id: &str) -> &'static str {
    match participant_id {
        "2" => "Brightline Labs",
        "3" => "Northwind Studio",
        "4" => "Quanta Analytics",
        _ => "New contact",
    }
}

fn candidate(id: &str, name: &str, title: &str, years: u32, skills: &[&str], bio: &str, location: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        job_title: title.to_string(),
        experience: years,
        skills: strings(skills),
        bio: bio.to_string(),
        location: location.to_string(),
    }
}

fn fixture_candidates(pool: UserType) -> Vec<Candidate> {
    match pool {
        UserType::Company => vec![
            candidate("c1", "Priya Natarajan", "Senior Frontend Developer", 6,
                &["React", "TypeScript", "CSS", "Accessibility"],
                "Builds fast, accessible web apps and mentors junior engineers.",
                "San Francisco, CA"),
            candidate("c2", "Marcus Oyelaran", "Backend Engineer", 3,
                &["Go", "PostgreSQL", "Kafka", "AWS"],
                "Designs event-driven services that stay boring under load.",
                "Seattle, WA"),
            candidate("c3", "Lena Fischer", "Product Designer", 4,
                &["Figma", "User Research", "Prototyping", "Design Systems"],
                "Turns messy research into crisp, testable interfaces.",
                "New York, NY"),
            candidate("c4", "Tomás Rivera", "Full Stack Developer", 7,
                &["Rust", "React", "Docker", "Kubernetes"],
                "Ships end-to-end features from schema to pixels.",
                "Austin, TX"),
        ],
        UserType::Startup => vec![
            candidate("s1", "Hana Sato", "Founding Engineer", 5,
                &["TypeScript", "Node.js", "Postgres", "Startup Experience"],
                "Second early-stage role; happy wearing several hats.",
                "San Francisco, CA"),
            candidate("s2", "Diego Marín", "Growth Marketer", 4,
                &["SEO", "Lifecycle Email", "Analytics", "Paid Social"],
                "Took two products from launch to their first ten thousand users.",
                "Austin, TX"),
            candidate("s3", "Amara Okafor", "Product Designer", 3,
                &["UI/UX", "Figma", "Growth Design", "User Research"],
                "Joined a seed-stage team and stayed through Series A.",
                "New York, NY"),
            candidate("s4", "Felix Brandt", "Technical Co-Founder", 9,
                &["System Architecture", "Python", "Machine Learning", "Fundraising"],
                "Looking for a mission-driven team to lead engineering from day one.",
                "Boston, MA"),
        ],
        UserType::Individual => Vec::new(),
    }
}

fn job(id: &str, company: &str, title: &str, description: &str, location: &str, salary: &str,
       skills: &[&str], posted: NaiveDate, remote: bool) -> Job {
    Job {
        id: id.to_string(),
        company_id: id.to_string(),
        company_name: company.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        skills: strings(skills),
        posted_date: posted,
        is_remote: remote,
    }
}

fn fixture_jobs() -> Vec<Job> {
    vec![
        job("1", "Brightline Labs", "Senior Mobile Developer",
            "Own the mobile client end to end alongside a small product team.",
            "San Francisco, CA", "$120,000 - $150,000",
            &["Swift", "Kotlin", "TypeScript", "CI/CD"], date(2023, 10, 15), true),
        job("2", "Northwind Studio", "UX/UI Designer",
            "Shape the design system and the flows our customers use every day.",
            "New York, NY", "$90,000 - $120,000",
            &["Figma", "UI Design", "User Research", "Prototyping"], date(2023, 10, 18), false),
        job("3", "Quanta Analytics", "Data Scientist",
            "Model and visualise large operational datasets for enterprise clients.",
            "Austin, TX", "$110,000 - $140,000",
            &["Python", "Machine Learning", "SQL", "Data Visualization"], date(2023, 10, 20), true),
        job("4", "Stratus Cloud", "DevOps Engineer",
            "Run the platform that keeps a few hundred services deployed and observable.",
            "Seattle, WA", "$130,000 - $160,000",
            &["AWS", "Kubernetes", "Terraform", "Docker"], date(2023, 10, 22), true),
    ]
}

fn message(id: &str, from: &str, to: &str, content: &str, ts: (u32, u32, u32, u32), read: bool) -> Message {
    let (month, day, hour, minute) = ts;
    Message {
        id: id.to_string(),
        sender_id: from.to_string(),
        receiver_id: to.to_string(),
        content: content.to_string(),
        timestamp: Utc
            .with_ymd_and_hms(2023, month, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
        read,
    }
}

fn fixture_inbox(user_id: &str) -> (Vec<Conversation>, HashMap<String, Vec<Message>>) {
    let me = user_id;
    let threads: Vec<(&str, Vec<Message>, u32)> = vec![
        ("2", vec![
            message("101", "2", me, "Hi! Your profile caught our eye. Open to a chat about a new role?", (11, 10, 14, 30), true),
            message("102", me, "2", "Hello! Happy to talk. What kind of role do you have in mind?", (11, 10, 14, 35), true),
            message("103", "2", me, "A senior engineer for our mobile team. Your background looks like a strong fit.", (11, 10, 14, 40), true),
        ], 0),
        ("3", vec![
            message("201", "3", me, "Thanks for connecting! When would suit you for a short call?", (11, 12, 9, 15), false),
        ], 1),
        ("4", vec![
            message("301", me, "4", "I'd like to learn more about the position. Could you share the job description?", (11, 13, 16, 45), true),
            message("302", "4", me, "Of course, sending it over shortly.", (11, 13, 16, 50), true),
        ], 0),
    ];

    let mut conversations = Vec::new();
    let mut by_id = HashMap::new();
    for (other, messages, unread) in threads {
        let id = format!("{}-{}", me, other);
        if let Some(last) = messages.last() {
            conversations.push(Conversation {
                id: id.clone(),
                participants: vec![me.to_string(), other.to_string()],
                title: contact_name(other).to_string(),
                last_message: last.clone(),
                unread_count: unread,
            });
        }
        by_id.insert(id, messages);
    }
    (conversations, by_id)
}

fn fixture_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "1".to_string(),
            title: "Interview with Brightline Labs".to_string(),
            description: "First round for the Senior Mobile Developer position".to_string(),
            date: date(2023, 11, 15),
            start_time: time(10, 0),
            end_time: time(11, 0),
            participants: strings(&["1", "2"]),
            location: None,
            is_online: true,
            meeting_link: Some("https://meet.example.com/brightline".to_string()),
        },
        CalendarEvent {
            id: "2".to_string(),
            title: "Coffee chat with Northwind Studio".to_string(),
            description: "Informal conversation about upcoming openings".to_string(),
            date: date(2023, 11, 17),
            start_time: time(14, 0),
            end_time: time(15, 0),
            participants: strings(&["1", "3"]),
            location: Some("Blue Door Café, 123 Main St".to_string()),
            is_online: false,
            meeting_link: None,
        },
        CalendarEvent {
            id: "3".to_string(),
            title: "Technical assessment".to_string(),
            description: "Take-home review for the Data Scientist role".to_string(),
            date: date(2023, 11, 20),
            start_time: time(13, 0),
            end_time: time(15, 0),
            participants: strings(&["1", "4"]),
            location: None,
            is_online: true,
            meeting_link: Some("https://meet.example.com/quanta".to_string()),
        },
    ]
}
