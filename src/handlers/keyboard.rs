//! Keyboard Input Handler
//!
//! Handles all keyboard input. Prompts and popups get the key first, then
//! the current screen, then the current home tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use nexttui::api::{Decision, UserType};
use nexttui::logic::navigation::{next_selection, prev_selection};
use nexttui::model::{FormKind, VimCommandState};
use nexttui::{Screen, Tab};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    match app.model.ui.screen {
        Screen::Splash => app.advance_from_splash(),
        Screen::Onboarding => handle_onboarding_key(app, key),
        Screen::Welcome => handle_welcome_key(app, key),
        Screen::UserType => handle_user_type_key(app, key),
        Screen::Login | Screen::Signup => handle_form_key(app, key),
        Screen::Home => handle_home_key(app, key),
    }

    Ok(())
}

fn handle_onboarding_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
            app.next_onboarding_slide()
        }
        KeyCode::Left | KeyCode::Char('h') => app.prev_onboarding_slide(),
        // Skip
        KeyCode::Esc | KeyCode::Char('s') => app.finish_onboarding(),
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        _ => {}
    }
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('g') => app.model.ui.go_to(Screen::UserType),
        KeyCode::Char('l') => app.model.ui.go_to(Screen::Login),
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        _ => {}
    }
}

fn handle_user_type_key(app: &mut App, key: KeyEvent) {
    let count = UserType::ALL.len();
    let ui = &mut app.model.ui;
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => ui.user_type_index = (ui.user_type_index + 1) % count,
        KeyCode::Up | KeyCode::Char('k') => {
            ui.user_type_index = (ui.user_type_index + count - 1) % count
        }
        KeyCode::Char(c @ '1'..='3') => {
            ui.user_type_index = c as usize - '1' as usize;
            app.choose_user_type();
        }
        KeyCode::Enter => app.choose_user_type(),
        KeyCode::Esc => {
            if app.model.session.is_authenticated() {
                app.enter_home();
            } else {
                app.model.ui.go_to(Screen::Welcome);
            }
        }
        KeyCode::Char('q') => ui.should_quit = true,
        _ => {}
    }
}

/// Text entry for the auth screens and the home popups
fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.model.ui.form.as_mut() else {
        return;
    };
    if form.submitting {
        // Only Esc gets through while a request is out
        if key.code != KeyCode::Esc {
            return;
        }
    }

    match key.code {
        KeyCode::Esc => cancel_form(app),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter if !form.is_last_field() => form.next_field(),
        KeyCode::Enter => submit_form(app),
        // Login and sign-up link to each other
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if form.kind == FormKind::Login {
                app.model.ui.go_to(Screen::Signup);
            }
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if form.kind == FormKind::Signup {
                app.model.ui.go_to(Screen::Login);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert_char(c),
        _ => {}
    }
}

fn submit_form(app: &mut App) {
    let Some(kind) = app.model.ui.form.as_ref().map(|f| f.kind.clone()) else {
        return;
    };
    match kind {
        FormKind::Login => app.submit_login(),
        FormKind::Signup => app.submit_signup(),
        FormKind::NewEvent | FormKind::EditEvent(_) => app.submit_event_form(),
        FormKind::Profile => app.submit_profile_form(),
    }
}

fn cancel_form(app: &mut App) {
    match app.model.ui.form.as_ref().map(|f| f.kind.clone()) {
        Some(FormKind::Login) => app.model.ui.go_to(Screen::Welcome),
        Some(FormKind::Signup) => app.model.ui.go_to(Screen::UserType),
        _ => app.model.ui.form = None,
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    // Delete confirmation swallows everything
    if app.model.ui.confirm_delete_event.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete_event(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete_event = None
            }
            _ => {}
        }
        return;
    }

    if app.model.ui.form.is_some() {
        handle_form_key(app, key);
        return;
    }

    if app.model.ui.composing {
        handle_draft_key(app, key);
        return;
    }

    if handle_vim_jump(app, key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            app.select_tab_index(c as usize - '1' as usize);
            return;
        }
        KeyCode::Char('r') => {
            app.load_tab(true);
            return;
        }
        _ => {}
    }

    match app.model.ui.tab {
        Tab::Jobs => handle_jobs_key(app, key),
        Tab::Candidates => handle_deck_key(app, key),
        Tab::Calendar => handle_calendar_key(app, key),
        Tab::Messages => handle_messages_key(app, key),
        Tab::Profile => handle_profile_key(app, key),
    }
}

/// 'gg' / 'G' in vim mode; returns true when the key was consumed
fn handle_vim_jump(app: &mut App, key: KeyEvent) -> bool {
    if !app.model.ui.vim_mode {
        return false;
    }

    match key.code {
        KeyCode::Char('g') => {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                app.model.ui.vim_command_state = VimCommandState::None;
                jump_selection(app, false);
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
            true
        }
        KeyCode::Char('G') => {
            app.model.ui.vim_command_state = VimCommandState::None;
            jump_selection(app, true);
            true
        }
        _ => {
            app.model.ui.vim_command_state = VimCommandState::None;
            false
        }
    }
}

/// List selection of the current tab and the list length
fn current_selection(app: &mut App) -> Option<(&mut Option<usize>, usize)> {
    let model = &mut app.model;
    match model.ui.tab {
        Tab::Jobs if !model.jobs.details_open => {
            Some((&mut model.jobs.selected, model.jobs.jobs.len()))
        }
        Tab::Calendar => Some((&mut model.calendar.selected, model.calendar.events.len())),
        Tab::Messages if model.messages.thread.is_none() => Some((
            &mut model.messages.selected,
            model.messages.conversations.len(),
        )),
        _ => None,
    }
}

fn move_selection(app: &mut App, down: bool) {
    if let Some((selected, len)) = current_selection(app) {
        *selected = if down {
            next_selection(*selected, len)
        } else {
            prev_selection(*selected, len)
        };
    }
}

fn jump_selection(app: &mut App, to_end: bool) {
    if let Some((selected, len)) = current_selection(app) {
        if len > 0 {
            *selected = Some(if to_end { len - 1 } else { 0 });
        }
    }
}

fn is_down(app: &App, key: &KeyEvent) -> bool {
    key.code == KeyCode::Down || (app.model.ui.vim_mode && key.code == KeyCode::Char('j'))
}

fn is_up(app: &App, key: &KeyEvent) -> bool {
    key.code == KeyCode::Up || (app.model.ui.vim_mode && key.code == KeyCode::Char('k'))
}

fn handle_jobs_key(app: &mut App, key: KeyEvent) {
    if is_down(app, &key) {
        return move_selection(app, true);
    }
    if is_up(app, &key) {
        return move_selection(app, false);
    }

    let jobs = &mut app.model.jobs;
    match key.code {
        KeyCode::Enter if jobs.selected_job().is_some() => jobs.details_open = true,
        KeyCode::Esc | KeyCode::Backspace => jobs.details_open = false,
        KeyCode::Char('p') => {
            // Profile completion card shortcut
            app.switch_tab(Tab::Profile);
            app.open_profile_form();
        }
        _ => {}
    }
}

fn handle_deck_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('y') => {
            app.commit_decision(Decision::Accept)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('n') => {
            app.commit_decision(Decision::Reject)
        }
        _ => {}
    }
}

fn handle_calendar_key(app: &mut App, key: KeyEvent) {
    if is_down(app, &key) {
        return move_selection(app, true);
    }
    if is_up(app, &key) {
        return move_selection(app, false);
    }

    match key.code {
        KeyCode::Char('a') => app.open_new_event_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_event_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.ask_delete_event(),
        _ => {}
    }
}

fn handle_messages_key(app: &mut App, key: KeyEvent) {
    if app.model.messages.thread.is_some() {
        match key.code {
            KeyCode::Char('i') | KeyCode::Enter => app.model.ui.composing = true,
            KeyCode::Esc | KeyCode::Backspace => app.close_thread(),
            _ => {}
        }
        return;
    }

    if is_down(app, &key) {
        return move_selection(app, true);
    }
    if is_up(app, &key) {
        return move_selection(app, false);
    }
    if key.code == KeyCode::Enter {
        app.open_selected_conversation();
    }
}

fn handle_draft_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.model.ui.composing = false,
        KeyCode::Enter => app.send_draft(),
        KeyCode::Backspace => {
            app.model.messages.draft.pop();
        }
        KeyCode::Char(c) => app.model.messages.draft.push(c),
        _ => {}
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => app.open_profile_form(),
        KeyCode::Char('L') => app.logout(),
        _ => {}
    }
}
