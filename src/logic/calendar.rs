//! Calendar logic
//!
//! Grouping events into days, display formatting, and turning the raw text of
//! the event form into a typed event.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::api::{CalendarEvent, NewCalendarEvent};

/// Events that fall on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

/// Group events by date, days ascending, events within a day by start time
pub fn group_by_date(events: &[CalendarEvent]) -> Vec<DayGroup> {
    let mut sorted: Vec<CalendarEvent> = events.to_vec();
    sorted.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

    let mut groups: Vec<DayGroup> = Vec::new();
    for event in sorted {
        match groups.last_mut() {
            Some(group) if group.date == event.date => group.events.push(event),
            _ => groups.push(DayGroup {
                date: event.date,
                events: vec![event],
            }),
        }
    }
    groups
}

/// Events in display order (the order `group_by_date` lays them out)
pub fn display_order(events: &[CalendarEvent]) -> Vec<CalendarEvent> {
    group_by_date(events)
        .into_iter()
        .flat_map(|g| g.events)
        .collect()
}

/// Day heading, e.g. "Wednesday, November 15"
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use nexttui::logic::calendar::format_day_heading;
///
/// let date = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
/// assert_eq!(format_day_heading(date), "Wednesday, November 15");
/// ```
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "10:00 - 11:00"
pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
}

/// Where the event takes place, for the event card
pub fn format_venue(event: &CalendarEvent) -> String {
    if event.is_online {
        match &event.meeting_link {
            Some(link) => format!("Online · {}", link),
            None => "Online".to_string(),
        }
    } else {
        event
            .location
            .clone()
            .unwrap_or_else(|| "Location to be confirmed".to_string())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventFormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Date must look like YYYY-MM-DD")]
    InvalidDate,

    #[error("{0} time must look like HH:MM")]
    InvalidTime(&'static str),

    #[error("End time must be after start time")]
    EndBeforeStart,
}

/// Raw text of the event form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFormInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    /// Physical address or meeting link; links make the event online
    pub place: &'a str,
}

/// Validate the event form and build the event
pub fn parse_event_form(
    input: &EventFormInput<'_>,
    participants: Vec<String>,
) -> Result<NewCalendarEvent, EventFormError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(EventFormError::MissingTitle);
    }

    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
        .map_err(|_| EventFormError::InvalidDate)?;
    let start_time = NaiveTime::parse_from_str(input.start_time.trim(), "%H:%M")
        .map_err(|_| EventFormError::InvalidTime("Start"))?;
    let end_time = NaiveTime::parse_from_str(input.end_time.trim(), "%H:%M")
        .map_err(|_| EventFormError::InvalidTime("End"))?;

    if end_time <= start_time {
        return Err(EventFormError::EndBeforeStart);
    }

    let place = input.place.trim();
    let is_online = is_meeting_link(place);
    let (location, meeting_link) = match (place.is_empty(), is_online) {
        (true, _) => (None, None),
        (false, true) => (None, Some(place.to_string())),
        (false, false) => (Some(place.to_string()), None),
    };

    Ok(NewCalendarEvent {
        title: title.to_string(),
        description: input.description.trim().to_string(),
        date,
        start_time,
        end_time,
        participants,
        location,
        is_online,
        meeting_link,
    })
}

fn is_meeting_link(place: &str) -> bool {
    place.starts_with("https://") || place.starts_with("http://")
}

/// Text the event form is pre-filled with when editing
pub fn place_of(event: &CalendarEvent) -> String {
    event
        .meeting_link
        .clone()
        .or_else(|| event.location.clone())
        .unwrap_or_default()
}
