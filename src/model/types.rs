//! Shared types for the Model
//!
//! Text-entry forms and key-sequence state used across sub-models.

use crate::api::CalendarEvent;
use crate::logic::calendar::{place_of, EventFormInput};
use crate::logic::profile::ProfileField;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// What a form submits to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
    NewEvent,
    EditEvent(String), // event id
    Profile,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Login => "Log in",
            FormKind::Signup => "Create account",
            FormKind::NewEvent => "New event",
            FormKind::EditEvent(_) => "Edit event",
            FormKind::Profile => "Edit profile",
        }
    }

    /// Forms that pop over the home screen rather than filling a screen
    pub fn is_popup(&self) -> bool {
        matches!(
            self,
            FormKind::NewEvent | FormKind::EditEvent(_) | FormKind::Profile
        )
    }
}

/// One text input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub masked: bool, // Render as bullets (passwords)
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// Form being filled in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    fn new(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
            error: None,
            submitting: false,
        }
    }

    pub fn login() -> Self {
        Self::new(
            FormKind::Login,
            vec![
                FormField::new("email", "Email"),
                FormField::new("password", "Password").masked(),
            ],
        )
    }

    pub fn signup() -> Self {
        Self::new(
            FormKind::Signup,
            vec![
                FormField::new("name", "Full name"),
                FormField::new("email", "Email"),
                FormField::new("password", "Password").masked(),
                FormField::new("confirm_password", "Confirm password").masked(),
            ],
        )
    }

    fn event_fields() -> Vec<FormField> {
        vec![
            FormField::new("title", "Title"),
            FormField::new("description", "Description"),
            FormField::new("date", "Date (YYYY-MM-DD)"),
            FormField::new("start_time", "Start (HH:MM)"),
            FormField::new("end_time", "End (HH:MM)"),
            FormField::new("place", "Location or meeting link"),
        ]
    }

    /// Empty event form, pre-filled with a date
    pub fn new_event(date: &str) -> Self {
        let mut form = Self::new(FormKind::NewEvent, Self::event_fields());
        form.set_value("date", date);
        form
    }

    pub fn edit_event(event: &CalendarEvent) -> Self {
        let mut form = Self::new(FormKind::EditEvent(event.id.clone()), Self::event_fields());
        form.set_value("title", &event.title);
        form.set_value("description", &event.description);
        form.set_value("date", &event.date.format("%Y-%m-%d").to_string());
        form.set_value("start_time", &event.start_time.format("%H:%M").to_string());
        form.set_value("end_time", &event.end_time.format("%H:%M").to_string());
        form.set_value("place", &place_of(event));
        form
    }

    pub fn profile(fields: Vec<ProfileField>) -> Self {
        let fields = fields
            .into_iter()
            .map(|f| FormField::new(f.key, f.label).with_value(f.value))
            .collect();
        Self::new(FormKind::Profile, fields)
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.to_string();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
            self.error = None;
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn is_last_field(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    /// Key/value pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|f| (f.key, f.value.as_str()))
    }

    /// Borrow the event fields in the shape the calendar parser expects
    pub fn event_input(&self) -> EventFormInput<'_> {
        EventFormInput {
            title: self.value("title"),
            description: self.value("description"),
            date: self.value("date"),
            start_time: self.value("start_time"),
            end_time: self.value("end_time"),
            place: self.value("place"),
        }
    }
}

/// Screen rectangle the top card was last drawn into, in terminal cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CardArea {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = FormState::login();
        for c in "a@b.c".chars() {
            form.insert_char(c);
        }
        form.next_field();
        form.insert_char('x');
        form.backspace();
        form.insert_char('y');

        assert_eq!(form.value("email"), "a@b.c");
        assert_eq!(form.value("password"), "y");
        assert!(form.focused_field().unwrap().masked);
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut form = FormState::signup();
        form.prev_field();
        assert_eq!(form.focused, 3);
        assert!(form.is_last_field());
        form.next_field();
        assert_eq!(form.focused, 0);
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = FormState::login();
        form.error = Some("Please fill in all fields".to_string());
        form.insert_char('a');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_edit_event_prefills() {
        let event = CalendarEvent {
            id: "9".to_string(),
            title: "Coffee chat".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 11, 17).unwrap(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            participants: vec![],
            location: Some("Cafe Rio".to_string()),
            is_online: false,
            meeting_link: None,
        };
        let form = FormState::edit_event(&event);

        assert_eq!(form.kind, FormKind::EditEvent("9".to_string()));
        assert_eq!(form.value("date"), "2023-11-17");
        assert_eq!(form.value("start_time"), "14:00");
        assert_eq!(form.value("place"), "Cafe Rio");
        assert_eq!(form.event_input().end_time, "14:30");
    }

    #[test]
    fn test_card_area_contains() {
        let area = CardArea {
            x: 10,
            y: 5,
            width: 20,
            height: 8,
        };
        assert!(area.contains(10, 5));
        assert!(area.contains(29, 12));
        assert!(!area.contains(30, 12));
        assert!(!area.contains(9, 6));
    }
}
