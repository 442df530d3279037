//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! current screen and tab, forms, dialogs, toasts and key handling state.

use std::time::Instant;

use super::types::{CardArea, FormState, VimCommandState};
use crate::api::UserType;
use crate::{Screen, Tab};

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // NAVIGATION
    // ============================================
    pub screen: Screen,

    /// When the current screen was entered (drives the splash timer)
    pub screen_entered_at: Instant,

    pub tab: Tab,

    /// Index of the onboarding slide shown
    pub onboarding_slide: usize,

    /// Highlighted row on the user type screen
    pub user_type_index: usize,

    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Form being edited (login/sign-up screens, event and profile popups)
    pub form: Option<FormState>,

    /// Delete confirmation for a calendar event (id, title)
    pub confirm_delete_event: Option<(String, String)>,

    /// Message draft input focused in an open thread
    pub composing: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Where the top card was last drawn, for mouse hit-testing
    pub card_area: Option<CardArea>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            screen: Screen::Splash,
            screen_entered_at: Instant::now(),
            tab: Tab::Jobs,
            onboarding_slide: 0,
            user_type_index: 0,
            vim_mode,
            vim_command_state: VimCommandState::None,
            form: None,
            confirm_delete_event: None,
            composing: false,
            toast_message: None,
            card_area: None,
            should_quit: false,
        }
    }

    /// Switch screen and restart its timer; closes any popup
    pub fn go_to(&mut self, screen: Screen) {
        self.screen = screen;
        self.screen_entered_at = Instant::now();
        self.close_all_modals();
        self.form = match screen {
            Screen::Login => Some(FormState::login()),
            Screen::Signup => Some(FormState::signup()),
            _ => None,
        };
        if screen == Screen::Onboarding {
            self.onboarding_slide = 0;
        }
    }

    pub fn selected_user_type(&self) -> UserType {
        UserType::ALL[self.user_type_index.min(UserType::ALL.len() - 1)]
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.form.as_ref().is_some_and(|f| f.kind.is_popup())
            || self.confirm_delete_event.is_some()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        if self.form.as_ref().is_some_and(|f| f.kind.is_popup()) {
            self.form = None;
        }
        self.confirm_delete_event = None;
        self.composing = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        match &self.toast_message {
            Some((_, shown_at)) => crate::logic::ui::should_dismiss_toast(*shown_at, now),
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::FormKind;
    use std::time::Duration;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(true);
        assert_eq!(model.screen, Screen::Splash);
        assert!(model.vim_mode);
        assert!(!model.should_quit);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_go_to_prepares_auth_forms() {
        let mut model = UiModel::new(false);
        model.go_to(Screen::Login);
        assert_eq!(model.form.as_ref().map(|f| f.kind.clone()), Some(FormKind::Login));
        // Screen forms are not modal
        assert!(!model.has_modal());

        model.go_to(Screen::Home);
        assert!(model.form.is_none());
    }

    #[test]
    fn test_popup_form_is_modal() {
        let mut model = UiModel::new(false);
        model.form = Some(FormState::new_event("2023-11-21"));
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
        assert!(model.form.is_none());
    }

    #[test]
    fn test_close_all_modals_keeps_screen_form() {
        let mut model = UiModel::new(false);
        model.go_to(Screen::Signup);
        model.confirm_delete_event = Some(("1".to_string(), "Interview".to_string()));
        model.close_all_modals();
        assert!(model.form.is_some());
        assert!(model.confirm_delete_event.is_none());
    }

    #[test]
    fn test_selected_user_type_clamps() {
        let mut model = UiModel::new(false);
        assert_eq!(model.selected_user_type(), UserType::Individual);
        model.user_type_index = 9;
        assert_eq!(model.selected_user_type(), UserType::Startup);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        let now = Instant::now();
        assert!(!model.should_dismiss_toast(now));

        model.show_toast("Event saved".to_string());
        let (_, shown_at) = model.toast_message.clone().unwrap();
        assert!(!model.should_dismiss_toast(shown_at));
        assert!(model.should_dismiss_toast(shown_at + Duration::from_millis(1500)));

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
