//! Text forms: login and sign-up screens, event and profile popups

use nexttui::model::{FormKind, FormState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

const FORM_WIDTH: u16 = 56;

/// Lines for every field plus the error/status line
fn form_lines(form: &FormState) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));

        let shown = if field.masked {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        let mut input = vec![Span::raw("  "), Span::raw(shown)];
        if focused {
            input.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(input));
    }

    lines.push(Line::raw(""));
    if form.submitting {
        lines.push(Line::from(Span::styled(
            "Working…",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::raw(""));
    }

    lines
}

fn footer(kind: &FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Enter: log in · Ctrl+S: create account · Esc: back",
        FormKind::Signup => "Enter: sign up · Ctrl+L: log in instead · Esc: back",
        _ => "Tab: next field · Enter: save · Esc: cancel",
    }
}

fn render_form_in(f: &mut Frame, area: Rect, form: &FormState, subtitle: Option<&str>) {
    let mut lines = Vec::new();
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::raw(""));
    }
    lines.extend(form_lines(form));
    lines.push(Line::from(Span::styled(
        footer(&form.kind),
        Style::default().fg(Color::DarkGray),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let form_area = centered_rect(FORM_WIDTH, height, area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.kind.title()))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, form_area);
    f.render_widget(paragraph, form_area);
}

/// Full-screen login or sign-up form
pub fn render_auth_screen(f: &mut Frame, form: &FormState, role_label: Option<&str>) {
    let subtitle = match (&form.kind, role_label) {
        (FormKind::Signup, Some(role)) => format!("Joining as: {}", role),
        (FormKind::Signup, None) => "Create your N.E.X.T account".to_string(),
        _ => "Welcome back".to_string(),
    };
    render_form_in(f, f.area(), form, Some(&subtitle));
}

/// Event or profile form over the home screen
pub fn render_form_popup(f: &mut Frame, form: &FormState) {
    render_form_in(f, f.area(), form, None);
}
