//! Mouse Input Handler
//!
//! Left-button drags on the top card are the swipe gesture. A drag has to
//! start on the card; once started it is tracked anywhere on screen.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use nexttui::{Screen, Tab};

use crate::App;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.model.ui.screen != Screen::Home
        || app.model.ui.tab != Tab::Candidates
        || app.model.has_modal()
    {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let on_card = app
                .model
                .ui
                .card_area
                .is_some_and(|area| area.contains(mouse.column, mouse.row));
            if on_card {
                app.deck_begin_drag(mouse.column, mouse.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.deck_drag_to(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => {
            // Last position counts even if no drag event carried it
            app.deck_drag_to(mouse.column, mouse.row);
            app.deck_release();
        }
        _ => {}
    }
}
