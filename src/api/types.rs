use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role; decides which home tabs are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Individual,
    Company,
    Startup,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Individual, UserType::Company, UserType::Startup];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Individual => "individual",
            UserType::Company => "company",
            UserType::Startup => "startup",
        }
    }

    pub fn parse(s: &str) -> Option<UserType> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Some(UserType::Individual),
            "company" => Some(UserType::Company),
            "startup" => Some(UserType::Startup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Individual => "Individual",
            UserType::Company => "Company",
            UserType::Startup => "Startup",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            UserType::Individual => "I'm looking for a job",
            UserType::Company => "We're hiring for our company",
            UserType::Startup => "We're building an early-stage team",
        }
    }

    /// Whether this role browses candidates through the swipe deck
    pub fn recruits(&self) -> bool {
        !matches!(self, UserType::Individual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualProfile {
    pub skills: Vec<String>,
    pub experience: u32,
    pub bio: String,
    pub location: String,
    pub education: String,
    pub job_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub industry: String,
    pub size: String,
    pub description: String,
    pub location: String,
    pub website: String,
    pub founded_year: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    pub industry: String,
    /// Funding stage, e.g. "Seed", "Series A", "Growth"
    pub stage: String,
    pub description: String,
    pub location: String,
    pub website: String,
    pub founded_year: u32,
    pub team_size: u32,
    pub funding: String,
}

/// Role-specific profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "userType", rename_all = "lowercase")]
pub enum Profile {
    Individual(IndividualProfile),
    Company(CompanyProfile),
    Startup(StartupProfile),
}

impl Profile {
    /// Empty profile for a role
    pub fn empty(user_type: UserType) -> Self {
        match user_type {
            UserType::Individual => Profile::Individual(IndividualProfile::default()),
            UserType::Company => Profile::Company(CompanyProfile::default()),
            UserType::Startup => Profile::Startup(StartupProfile::default()),
        }
    }

    pub fn user_type(&self) -> UserType {
        match self {
            Profile::Individual(_) => UserType::Individual,
            Profile::Company(_) => UserType::Company,
            Profile::Startup(_) => UserType::Startup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub posted_date: NaiveDate,
    pub is_remote: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub job_title: String,
    pub experience: u32,
    pub skills: Vec<String>,
    pub bio: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub is_online: bool,
    #[serde(default)]
    pub meeting_link: Option<String>,
}

/// Calendar event before the backend assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendarEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub participants: Vec<String>,
    pub location: Option<String>,
    pub is_online: bool,
    pub meeting_link: Option<String>,
}

impl NewCalendarEvent {
    pub fn with_id(self, id: String) -> CalendarEvent {
        CalendarEvent {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            participants: self.participants,
            location: self.location,
            is_online: self.is_online,
            meeting_link: self.meeting_link,
        }
    }
}

/// Partial update for a calendar event; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarEventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<Option<String>>,
    pub is_online: Option<bool>,
    pub meeting_link: Option<Option<String>>,
}

impl CalendarEventPatch {
    /// Patch that overwrites every editable field with the values of `event`
    pub fn replace_with(event: &NewCalendarEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            date: Some(event.date),
            start_time: Some(event.start_time),
            end_time: Some(event.end_time),
            location: Some(event.location.clone()),
            is_online: Some(event.is_online),
            meeting_link: Some(event.meeting_link.clone()),
        }
    }

    pub fn apply(&self, event: &mut CalendarEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start) = self.start_time {
            event.start_time = start;
        }
        if let Some(end) = self.end_time {
            event.end_time = end;
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(is_online) = self.is_online {
            event.is_online = is_online;
        }
        if let Some(link) = &self.meeting_link {
            event.meeting_link = link.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    /// Display name of the other side
    pub title: String,
    pub last_message: Message,
    pub unread_count: u32,
}

/// Committed swipe decision for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
        }
    }
}
