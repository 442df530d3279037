//! Candidate deck
//!
//! The top card is drawn into an off-screen buffer, then copied onto the
//! frame row by row: every row is shifted by the drag displacement plus a
//! shear proportional to the tilt, which reads as a rotation in a grid of
//! cells. Cells that fall outside the deck area are dropped.

use nexttui::api::Candidate;
use nexttui::logic::formatting::{format_experience, format_skills};
use nexttui::model::{CardArea, DecisionLedger, SwipeDeck};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use super::layout::centered_rect;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 16;

/// Terminal cells are about twice as tall as wide
const CELL_ASPECT: f32 = 2.0;

/// Horizontal shift for a card row, given the tilt
///
/// Rows above the middle lean in the direction of the tilt, rows below lean
/// the other way.
pub fn row_shear(row: u16, height: u16, tilt_degrees: f32) -> i32 {
    if height == 0 || !tilt_degrees.is_finite() {
        return 0;
    }
    let center = (height as f32 - 1.0) / 2.0;
    let shift = (center - row as f32) * tilt_degrees.to_radians().tan() * CELL_ASPECT;
    shift.round() as i32
}

/// Stamp style for an overlay intensity; `None` while it should not show
pub fn stamp_style(intensity: f32, color: Color) -> Option<Style> {
    if !(intensity > 0.0) {
        return None;
    }
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    Some(if intensity < 0.34 {
        style.add_modifier(Modifier::DIM)
    } else if intensity < 0.67 {
        style
    } else {
        style.add_modifier(Modifier::REVERSED)
    })
}

fn card_lines(candidate: &Candidate) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            candidate.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            candidate.job_title.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!(
                "{} experience · {}",
                format_experience(candidate.experience),
                candidate.location
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format_skills(&candidate.skills),
            Style::default().fg(Color::Yellow),
        )),
        Line::raw(""),
        Line::raw(candidate.bio.clone()),
    ]
}

/// Draw a card into `buf` at `area`
fn draw_card(buf: &mut Buffer, area: Rect, candidate: &Candidate, border: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    Paragraph::new(card_lines(candidate))
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Draw LIKE / NOPE stamps in the card's top corners
fn draw_stamps(buf: &mut Buffer, area: Rect, accept: f32, reject: f32) {
    if area.width < 12 || area.height < 3 {
        return;
    }
    if let Some(style) = stamp_style(accept, Color::Green) {
        buf.set_string(area.x + 2, area.y + 1, " LIKE ", style);
    }
    if let Some(style) = stamp_style(reject, Color::Red) {
        buf.set_string(area.x + area.width - 8, area.y + 1, " NOPE ", style);
    }
}

/// Copy `card` onto `target`, each row shifted by `dx` plus its shear
fn blit_card(card: &Buffer, target: &mut Buffer, origin: (i32, i32), tilt: f32, clip: Rect) {
    let size = card.area;
    for row in 0..size.height {
        let y = origin.1 + row as i32;
        if y < clip.top() as i32 || y >= clip.bottom() as i32 {
            continue;
        }
        let shift = origin.0 + row_shear(row, size.height, tilt);
        for col in 0..size.width {
            let x = shift + col as i32;
            if x < clip.left() as i32 || x >= clip.right() as i32 {
                continue;
            }
            if let (Some(src), Some(dst)) = (
                card.cell((size.x + col, size.y + row)),
                target.cell_mut((x as u16, y as u16)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, title: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_rect(area.width, 3, area),
    );
}

fn render_counters(f: &mut Frame, area: Rect, ledger: &DecisionLedger, remaining: usize) {
    let line = Line::from(vec![
        Span::styled("♥ Liked: ", Style::default().fg(Color::Green)),
        Span::raw(ledger.liked.len().to_string()),
        Span::raw("   "),
        Span::styled("✗ Passed: ", Style::default().fg(Color::Red)),
        Span::raw(ledger.passed.len().to_string()),
        Span::raw("   "),
        Span::styled("Left: ", Style::default().fg(Color::Gray)),
        Span::raw(remaining.to_string()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the candidate deck
///
/// Returns where the top card rests, for mouse hit-testing.
pub fn render_deck(
    f: &mut Frame,
    area: Rect,
    deck: &mut SwipeDeck<Candidate>,
    ledger: &DecisionLedger,
    loading: bool,
    title: &str,
) -> Option<CardArea> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 4 || inner.width < 10 {
        return None;
    }

    // Threshold and exit distance follow the visible width
    deck.set_viewport_width(inner.width as f32);

    let counters_area = Rect { height: 1, ..inner };
    let stage = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };

    if loading && deck.items().is_empty() {
        render_message(f, stage, "Loading candidates…", "");
        return None;
    }

    render_counters(f, counters_area, ledger, deck.remaining());

    let Some(current) = deck.current() else {
        render_message(f, stage, "No more candidates", "Press r to check for new ones");
        return None;
    };

    let rest = centered_rect(CARD_WIDTH, CARD_HEIGHT, stage);

    // Next card waits underneath, dimmed and one row lower
    if let Some(next) = deck.next_up() {
        let under = Rect {
            y: (rest.y + 1).min(stage.bottom().saturating_sub(rest.height)),
            ..rest
        };
        let mut under_buf = Buffer::empty(under);
        draw_card(&mut under_buf, under, next, Style::default().fg(Color::DarkGray));
        under_buf.set_style(under, Style::default().add_modifier(Modifier::DIM));
        blit_card(&under_buf, f.buffer_mut(), (under.x as i32, under.y as i32), 0.0, stage);
    }

    let accept = deck.accept_intensity();
    let reject = deck.reject_intensity();
    let border = if accept > 0.0 {
        Style::default().fg(Color::Green)
    } else if reject > 0.0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let card_rect = Rect { x: 0, y: 0, ..rest };
    let mut card_buf = Buffer::empty(card_rect);
    draw_card(&mut card_buf, card_rect, current, border);
    draw_stamps(&mut card_buf, card_rect, accept, reject);

    let (dx, dy) = deck.displacement();
    let origin = (
        rest.x as i32 + dx.round() as i32,
        rest.y as i32 + dy.round() as i32,
    );
    blit_card(&card_buf, f.buffer_mut(), origin, deck.tilt_degrees(), stage);

    Some(CardArea {
        x: rest.x,
        y: rest.y,
        width: rest.width,
        height: rest.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_shear_without_tilt() {
        for row in 0..10 {
            assert_eq!(row_shear(row, 10, 0.0), 0);
        }
    }

    #[test]
    fn test_shear_leans_top_towards_tilt() {
        let top = row_shear(0, 11, 10.0);
        let middle = row_shear(5, 11, 10.0);
        let bottom = row_shear(10, 11, 10.0);
        assert!(top > 0);
        assert_eq!(middle, 0);
        assert_eq!(bottom, -top);
    }

    #[test]
    fn test_shear_degenerate_inputs() {
        assert_eq!(row_shear(0, 0, 10.0), 0);
        assert_eq!(row_shear(0, 5, f32::NAN), 0);
    }

    #[test]
    fn test_stamp_hidden_at_zero() {
        assert!(stamp_style(0.0, Color::Green).is_none());
        assert!(stamp_style(f32::NAN, Color::Green).is_none());
    }

    #[test]
    fn test_stamp_gets_stronger() {
        let faint = stamp_style(0.1, Color::Green).unwrap();
        let strong = stamp_style(1.0, Color::Green).unwrap();
        assert!(faint.add_modifier.contains(Modifier::DIM));
        assert!(strong.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_blit_clips_to_area() {
        let card_area = Rect::new(0, 0, 4, 2);
        let mut card = Buffer::empty(card_area);
        card.set_string(0, 0, "abcd", Style::default());
        card.set_string(0, 1, "efgh", Style::default());

        let mut target = Buffer::empty(Rect::new(0, 0, 10, 4));
        let clip = Rect::new(0, 0, 5, 4);
        blit_card(&card, &mut target, (3, 1), 0.0, clip);

        assert_eq!(target.cell((3, 1)).unwrap().symbol(), "a");
        assert_eq!(target.cell((4, 1)).unwrap().symbol(), "b");
        // Past the clip edge
        assert_eq!(target.cell((5, 1)).unwrap().symbol(), " ");
        assert_eq!(target.cell((3, 2)).unwrap().symbol(), "e");
    }
}
