//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **SessionModel**: Signed-in user, chosen role, onboarding flags
//! - **DiscoverModel**: Candidate swipe deck and decision ledger
//! - **JobsModel**: Recommended jobs
//! - **MessagesModel**: Conversations, open thread, draft
//! - **CalendarModel**: Events
//! - **ProfileModel**: Role profile
//! - **UiModel**: Screen, tab, forms, popups, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod calendar;
pub mod deck;
pub mod discover;
pub mod jobs;
pub mod messages;
pub mod profile;
pub mod session;
pub mod types;
pub mod ui;

pub use calendar::CalendarModel;
pub use deck::{DecisionLedger, DecisionSink, DeckItem, DeckPhase, DeckSettings, SwipeDeck};
pub use discover::DiscoverModel;
pub use jobs::JobsModel;
pub use messages::{MessagesModel, OpenThread};
pub use profile::ProfileModel;
pub use session::{OnboardingFlags, SessionModel};
pub use types::*;
pub use ui::UiModel;

use std::time::Instant;

use crate::api::UserType;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub session: SessionModel,
    pub discover: DiscoverModel,
    pub jobs: JobsModel,
    pub messages: MessagesModel,
    pub calendar: CalendarModel,
    pub profile: ProfileModel,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool, deck_settings: DeckSettings) -> Self {
        Self {
            session: SessionModel::default(),
            discover: DiscoverModel::new(deck_settings),
            jobs: JobsModel::default(),
            messages: MessagesModel::default(),
            calendar: CalendarModel::default(),
            profile: ProfileModel::default(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Role of the signed-in user
    pub fn role(&self) -> Option<UserType> {
        self.session.role()
    }

    /// Whether a request for the current screen is outstanding
    pub fn is_loading(&self) -> bool {
        self.discover.loading
            || self.jobs.loading
            || self.messages.loading
            || self.calendar.loading
            || self.ui.form.as_ref().is_some_and(|f| f.submitting)
    }

    /// Whether something on screen moves without input
    pub fn is_animating(&self) -> bool {
        self.discover.deck.is_animating() || self.discover.deck.is_dragging()
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Drop all per-user data; used on logout
    pub fn clear_user_data(&mut self) {
        self.discover.reset();
        self.jobs = JobsModel::default();
        self.messages = MessagesModel::default();
        self.calendar = CalendarModel::default();
        self.profile = ProfileModel::default();
        self.ui.card_area = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self, now: Instant) -> bool {
        self.ui.should_dismiss_toast(now)
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
