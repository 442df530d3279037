use nexttui::api::UserType;
use nexttui::logic::formatting::format_unread_badge;
use nexttui::logic::navigation::tabs_for;
use nexttui::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Tab titles for a role, with the unread badge on Messages
fn tab_titles(role: UserType, unread: u32) -> Vec<Line<'static>> {
    tabs_for(role)
        .iter()
        .enumerate()
        .map(|(idx, tab)| {
            let mut spans = vec![Span::raw(format!("{} {}", idx + 1, tab.title(role)))];
            if *tab == Tab::Messages {
                if let Some(badge) = format_unread_badge(unread) {
                    spans.push(Span::styled(
                        format!(" ({})", badge),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render_tabs(f: &mut Frame, area: Rect, role: UserType, current: Tab, unread: u32) {
    let selected = tabs_for(role).iter().position(|t| *t == current);

    let tabs = Tabs::new(tab_titles(role, unread))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" N.E.X.T · {} ", role.label())),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    f.render_widget(tabs, area);
}
