use nexttui::Tab;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What the current tab is showing, for context-aware hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub tab: Tab,
    /// Job details or an open conversation
    pub detail_open: bool,
    /// Typing into the message draft
    pub composing: bool,
}

fn key(keys: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(keys, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if ctx.composing {
        hotkey_spans.extend(key("Enter", ":Send  "));
        hotkey_spans.extend(key("Esc", ":Stop typing"));
        return hotkey_spans;
    }

    let nav = if ctx.vim_mode { "j/k" } else { "↑/↓" };

    match ctx.tab {
        Tab::Candidates => {
            let (reject, accept) = if ctx.vim_mode {
                ("h/←", "l/→")
            } else {
                ("←", "→")
            };
            hotkey_spans.extend(key(reject, ":Pass  "));
            hotkey_spans.extend(key(accept, ":Like  "));
            hotkey_spans.extend(key("drag", ":Swipe card  "));
        }
        Tab::Jobs if ctx.detail_open => {
            hotkey_spans.extend(key("Esc", ":Back  "));
        }
        Tab::Jobs => {
            hotkey_spans.extend(key(nav, ":Nav  "));
            hotkey_spans.extend(key("Enter", ":Details  "));
            hotkey_spans.extend(key("p", ":Complete profile  "));
        }
        Tab::Messages if ctx.detail_open => {
            hotkey_spans.extend(key("i", ":Write  "));
            hotkey_spans.extend(key("Esc", ":Back  "));
        }
        Tab::Messages => {
            hotkey_spans.extend(key(nav, ":Nav  "));
            hotkey_spans.extend(key("Enter", ":Open  "));
        }
        Tab::Calendar => {
            hotkey_spans.extend(key(nav, ":Nav  "));
            hotkey_spans.extend(key("a", ":Add  "));
            hotkey_spans.extend(key("e", ":Edit  "));
            hotkey_spans.extend(key("d", ":Delete  "));
        }
        Tab::Profile => {
            hotkey_spans.extend(key("e", ":Edit  "));
            hotkey_spans.extend(key("L", ":Log out  "));
        }
    }

    if ctx.vim_mode && matches!(ctx.tab, Tab::Jobs | Tab::Calendar | Tab::Messages) && !ctx.detail_open {
        hotkey_spans.extend(key("gg/G", ":First/Last  "));
    }

    hotkey_spans.extend(key("Tab/1-4", ":Switch tab  "));
    hotkey_spans.extend(key("r", ":Refresh  "));
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting =
        Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))]).wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
