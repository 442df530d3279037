use chrono::{DateTime, Utc};
use nexttui::api::Conversation;
use nexttui::logic::formatting::{format_unread_badge, preview_line, truncate_to_width};
use nexttui::logic::messages::{format_conversation_time, format_message_time};
use nexttui::model::MessagesModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_messages(
    f: &mut Frame,
    area: Rect,
    model: &MessagesModel,
    user_id: &str,
    composing: bool,
    now: DateTime<Utc>,
) {
    match &model.thread {
        Some(_) => render_thread(f, area, model, user_id, composing),
        None => render_conversation_list(f, area, model, now),
    }
}

fn conversation_item(conversation: &Conversation, width: usize, now: DateTime<Utc>) -> ListItem<'static> {
    let time = format_conversation_time(conversation.last_message.timestamp, now);
    let unread = format_unread_badge(conversation.unread_count);

    let title_style = if unread.is_some() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    // Title left, time right
    let gap = width
        .saturating_sub(conversation.title.width() + time.width())
        .max(1);
    let header = Line::from(vec![
        Span::styled(conversation.title.clone(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(time, Style::default().fg(Color::Gray)),
    ]);

    let badge_width = unread.as_ref().map_or(0, |b| b.width() + 3);
    let preview = truncate_to_width(
        preview_line(&conversation.last_message.content),
        width.saturating_sub(badge_width),
    );
    let mut second = vec![Span::styled(preview, Style::default().fg(Color::Gray))];
    if let Some(badge) = unread {
        second.push(Span::raw(" "));
        second.push(Span::styled(
            format!("({})", badge),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    ListItem::new(vec![header, Line::from(second)])
}

fn render_conversation_list(f: &mut Frame, area: Rect, model: &MessagesModel, now: DateTime<Utc>) {
    let block = Block::default().borders(Borders::ALL).title(" Messages ");

    if model.conversations.is_empty() {
        let text = if model.loading {
            "Loading conversations…"
        } else {
            "No conversations yet"
        };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray))).block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = model
        .conversations
        .iter()
        .map(|c| conversation_item(c, width, now))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(model.selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_thread(f: &mut Frame, area: Rect, model: &MessagesModel, user_id: &str, composing: bool) {
    let Some(thread) = &model.thread else {
        return;
    };
    let title = model
        .open_conversation()
        .map_or("Conversation", |c| c.title.as_str());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines = Vec::new();
    if thread.loading {
        lines.push(Line::from(Span::styled(
            "Loading messages…",
            Style::default().fg(Color::Gray),
        )));
    }
    for message in &thread.messages {
        let mine = message.sender_id == user_id;
        let (who, color, alignment) = if mine {
            ("You", Color::Cyan, Alignment::Right)
        } else {
            (title, Color::Green, Alignment::Left)
        };
        lines.push(
            Line::from(vec![
                Span::styled(who.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", format_message_time(message.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .alignment(alignment),
        );
        lines.push(Line::raw(message.content.clone()).alignment(alignment));
        lines.push(Line::raw(""));
    }

    // Keep the newest messages in view
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let history = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(history, chunks[0]);

    let (draft_text, draft_style) = if model.sending {
        ("Sending…".to_string(), Style::default().fg(Color::Yellow))
    } else if composing {
        (format!("{}▏", model.draft), Style::default())
    } else if model.draft.is_empty() {
        (
            "Press i to write a message".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (model.draft.clone(), Style::default().fg(Color::Gray))
    };
    let border = if composing { Color::Cyan } else { Color::Gray };
    let draft = Paragraph::new(Span::styled(draft_text, draft_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Message "),
    );
    f.render_widget(draft, chunks[1]);
}
