use nexttui::api::CalendarEvent;
use nexttui::logic::calendar::{format_day_heading, format_time_range, format_venue, group_by_date};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// List rows: day headings interleaved with events
///
/// Returns the items and, for the selected event, its row index.
fn calendar_items(events: &[CalendarEvent], selected_id: Option<&str>) -> (Vec<ListItem<'static>>, Option<usize>) {
    let mut items = Vec::new();
    let mut selected_row = None;

    for group in group_by_date(events) {
        if !items.is_empty() {
            items.push(ListItem::new(Line::raw("")));
        }
        items.push(ListItem::new(Line::from(Span::styled(
            format_day_heading(group.date),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));

        for event in &group.events {
            if selected_id == Some(event.id.as_str()) {
                selected_row = Some(items.len());
            }
            let venue_color = if event.is_online {
                Color::Green
            } else {
                Color::Yellow
            };
            items.push(ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format_time_range(event.start_time, event.end_time),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw("  "),
                    Span::styled(event.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::raw("   "),
                    Span::styled(format_venue(event), Style::default().fg(venue_color)),
                ]),
            ]));
        }
    }

    (items, selected_row)
}

pub fn render_calendar(
    f: &mut Frame,
    area: Rect,
    events: &[CalendarEvent],
    selected: Option<usize>,
    loading: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Calendar ");

    if events.is_empty() {
        let text = if loading {
            "Loading events…"
        } else {
            "No upcoming events · press a to add one"
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray))).block(block),
            area,
        );
        return;
    }

    let selected_id = selected.and_then(|i| events.get(i)).map(|e| e.id.as_str());
    let (items, selected_row) = calendar_items(events, selected_id);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn event(id: &str, day: u32, hour: u32) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2023, 11, day).unwrap(),
            start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
            participants: vec![],
            location: Some("HQ".to_string()),
            is_online: false,
            meeting_link: None,
        }
    }

    #[test]
    fn test_rows_interleave_headings() {
        let events = vec![event("a", 15, 9), event("b", 15, 14), event("c", 16, 10)];
        let (items, _) = calendar_items(&events, None);
        // heading, a, b, spacer, heading, c
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_selected_event_maps_to_row() {
        let events = vec![event("a", 15, 9), event("b", 15, 14), event("c", 16, 10)];
        assert_eq!(calendar_items(&events, Some("a")).1, Some(1));
        assert_eq!(calendar_items(&events, Some("c")).1, Some(5));
        assert_eq!(calendar_items(&events, Some("zzz")).1, None);
    }
}
