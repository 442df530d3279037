use nexttui::api::Job;
use nexttui::logic::formatting::{format_posted_date, format_skills, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the individual's jobs tab
pub fn render_jobs(
    f: &mut Frame,
    area: Rect,
    greeting: &str,
    completion: Option<u8>,
    jobs: &[Job],
    selected: Option<usize>,
    details_open: bool,
    loading: bool,
) {
    if details_open {
        if let Some(job) = selected.and_then(|i| jobs.get(i)) {
            render_job_details(f, area, job);
            return;
        }
    }

    let card_height = if completion.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Greeting
            Constraint::Length(card_height), // Profile completion card
            Constraint::Min(3),              // Job list
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hello, {}", greeting),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Find your next opportunity",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(greeting, chunks[0]);

    if let Some(percent) = completion {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Complete your profile (p) "),
            )
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(percent.min(100) as u16);
        f.render_widget(gauge, chunks[1]);
    }

    render_job_list(f, chunks[2], jobs, selected, loading);
}

fn render_job_list(f: &mut Frame, area: Rect, jobs: &[Job], selected: Option<usize>, loading: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recommended jobs ");

    if jobs.is_empty() {
        let text = if loading { "Loading jobs…" } else { "No jobs right now" };
        f.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray))).block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = jobs
        .iter()
        .map(|job| {
            let mut title = vec![Span::styled(
                job.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if job.is_remote {
                title.push(Span::styled(" [Remote]", Style::default().fg(Color::Green)));
            }
            ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(
                    truncate_to_width(
                        &format!("{} · {} · {}", job.company_name, job.location, job.salary),
                        width,
                    ),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_job_details(f: &mut Frame, area: Rect, job: &Job) {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            job.company_name.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::from(vec![Span::styled("Location: ", label), Span::raw(job.location.clone())]),
        Line::from(vec![Span::styled("Salary:   ", label), Span::raw(job.salary.clone())]),
        Line::from(vec![
            Span::styled("Posted:   ", label),
            Span::raw(format_posted_date(job.posted_date)),
        ]),
    ];
    if job.is_remote {
        lines.push(Line::from(Span::styled(
            "Remote friendly",
            Style::default().fg(Color::Green),
        )));
    }
    lines.extend([
        Line::raw(""),
        Line::from(Span::styled("Skills", label)),
        Line::from(Span::styled(
            format_skills(&job.skills),
            Style::default().fg(Color::Yellow),
        )),
        Line::raw(""),
        Line::from(Span::styled("About the role", label)),
        Line::raw(job.description.clone()),
    ]);

    let details = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Job details (Esc: back) "),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(details, area);
}
