//! Calendar Model

use crate::api::CalendarEvent;
use crate::logic::calendar::display_order;
use crate::logic::navigation::clamp_selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalendarModel {
    /// Events in display order (by date, then start time)
    pub events: Vec<CalendarEvent>,
    pub selected: Option<usize>,
    pub loading: bool,
    pub loaded: bool,
}

impl CalendarModel {
    pub fn load(&mut self, events: Vec<CalendarEvent>) {
        self.events = display_order(&events);
        self.selected = clamp_selection(self.selected, self.events.len());
        self.loading = false;
        self.loaded = true;
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.selected.and_then(|i| self.events.get(i))
    }

    /// Insert or replace an event and keep it selected
    pub fn upsert(&mut self, event: CalendarEvent) {
        let id = event.id.clone();
        let mut events = std::mem::take(&mut self.events);
        match events.iter_mut().find(|e| e.id == id) {
            Some(existing) => *existing = event,
            None => events.push(event),
        }
        self.events = display_order(&events);
        self.selected = self.events.iter().position(|e| e.id == id);
    }

    pub fn remove(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
        self.selected = clamp_selection(self.selected, self.events.len());
    }
}
