use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Render the delete confirmation dialog for a calendar event
pub fn render_delete_event_confirmation(f: &mut Frame, title: &str) {
    let prompt_text = format!(
        "Delete this event?\n\n\
        {}\n\n\
        Continue? (y/n)",
        title
    );

    let prompt_area = centered_rect(50, 9, f.area());

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
