//! Splash, onboarding, welcome and user type screens

use nexttui::api::UserType;
use nexttui::logic::navigation::ONBOARDING_SLIDES;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

const BRAND: &str = "N.E.X.T";
const TAGLINE: &str = "Nurturing Entrepreneurs and eXceptional Talents";

const SLIDES: [(&str, &str); ONBOARDING_SLIDES] = [
    (
        "Find Your Dream Job",
        "Discover opportunities that match your skills and career goals.",
    ),
    (
        "Connect with Top Companies",
        "Build relationships with leading companies and startups in your industry.",
    ),
    (
        "Grow Your Team",
        "For companies, find exceptional talent to help your business thrive.",
    ),
];

fn brand_line() -> Line<'static> {
    Line::from(Span::styled(
        BRAND,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn hint_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

pub fn render_splash(f: &mut Frame) {
    let lines = vec![
        brand_line(),
        Line::raw(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
        Line::raw(""),
        hint_line("Press any key"),
    ];
    let area = centered_rect(60, lines.len() as u16, f.area());
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

pub fn render_onboarding(f: &mut Frame, slide: usize) {
    let (title, description) = SLIDES[slide.min(ONBOARDING_SLIDES - 1)];

    let dots: Vec<Span> = (0..ONBOARDING_SLIDES)
        .map(|i| {
            if i == slide {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let next = if slide + 1 >= ONBOARDING_SLIDES {
        "Enter: get started · Esc: skip"
    } else {
        "Enter/→: next · ←: back · Esc: skip"
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(description),
        Line::raw(""),
        Line::from(dots),
        Line::raw(""),
        hint_line(next),
    ];

    let area = centered_rect(60, 11, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", BRAND))
        .title_alignment(Alignment::Center);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_welcome(f: &mut Frame) {
    let lines = vec![
        brand_line(),
        Line::raw(""),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("Connect with top companies and exceptional talent to build your future together"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
            Span::raw("Get Started    "),
            Span::styled("[l] ", Style::default().fg(Color::Yellow)),
            Span::raw("Log in"),
        ]),
    ];
    let area = centered_rect(70, 8, f.area());
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

pub fn render_user_type(f: &mut Frame, highlighted: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "I am a…",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for (idx, user_type) in UserType::ALL.iter().enumerate() {
        let selected = idx == highlighted;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}. {}", marker, idx + 1, user_type.label()), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", user_type.tagline()),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(hint_line("↑/↓: choose · Enter: continue · Esc: back"));

    let area = centered_rect(50, lines.len() as u16 + 2, f.area());
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Choose your account type "),
        ),
        area,
    );
}
