use nexttui::api::{Profile, User};
use nexttui::logic::profile::profile_fields;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn render_profile(
    f: &mut Frame,
    area: Rect,
    user: Option<&User>,
    profile: Option<&Profile>,
    completion: u8,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name, email, role
            Constraint::Length(3), // Completion gauge
            Constraint::Min(3),    // Fields
        ])
        .split(area);

    let mut header = Vec::new();
    if let Some(user) = user {
        header.push(Line::from(Span::styled(
            user.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        header.push(Line::from(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::Gray),
        )));
        header.push(Line::from(Span::styled(
            format!("{} account", user.user_type.label()),
            Style::default().fg(Color::Cyan),
        )));
    }
    f.render_widget(Paragraph::new(header), chunks[0]);

    let gauge_color = if completion >= 100 {
        Color::Green
    } else {
        Color::Cyan
    };
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Profile completion "))
            .gauge_style(Style::default().fg(gauge_color))
            .percent(completion.min(100) as u16),
        chunks[1],
    );

    let lines: Vec<Line> = profile
        .map(profile_fields)
        .unwrap_or_default()
        .into_iter()
        .map(|field| {
            let value = if field.value.trim().is_empty() {
                Span::styled("—", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(field.value)
            };
            Line::from(vec![
                Span::styled(format!("{:<16}", field.label), Style::default().fg(Color::Gray)),
                value,
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Details (e: edit) "))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}
