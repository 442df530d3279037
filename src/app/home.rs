//! Role home and tab switching

use nexttui::logic::navigation::{home_tab, next_tab, prev_tab, tabs_for};
use nexttui::services::{ApiRequest, Priority};
use nexttui::{Screen, Tab};

use crate::App;

impl App {
    /// Show the role home on its first tab
    pub fn enter_home(&mut self) {
        let Some(role) = self.model.role() else {
            // No user; nothing to show at home
            self.model.ui.go_to(Screen::Welcome);
            return;
        };

        self.model.ui.go_to(Screen::Home);
        self.model.ui.tab = home_tab(role);
        self.load_tab(false);

        // Unread badge in the tab bar needs the conversation list
        self.request_conversations(Priority::Low, false);
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        let Some(role) = self.model.role() else {
            return;
        };
        if !tabs_for(role).contains(&tab) || self.model.ui.tab == tab {
            return;
        }

        if self.model.ui.tab == Tab::Candidates {
            // The deck view goes away; a card mid-exit must not commit
            self.model.discover.deck.detach();
            self.model.ui.card_area = None;
        }

        self.model.close_all_modals();
        self.model.ui.tab = tab;
        self.load_tab(false);
    }

    pub fn next_tab(&mut self) {
        if let Some(role) = self.model.role() {
            self.switch_tab(next_tab(role, self.model.ui.tab));
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(role) = self.model.role() {
            self.switch_tab(prev_tab(role, self.model.ui.tab));
        }
    }

    /// Jump to the n-th tab (0-based) of the role
    pub fn select_tab_index(&mut self, index: usize) {
        if let Some(role) = self.model.role() {
            if let Some(tab) = tabs_for(role).get(index) {
                self.switch_tab(*tab);
            }
        }
    }

    /// Fetch the current tab's data; `force` refetches even if loaded
    pub fn load_tab(&mut self, force: bool) {
        match self.model.ui.tab {
            Tab::Jobs => self.request_jobs(force),
            Tab::Candidates => self.request_candidates(force),
            Tab::Calendar => self.request_events(force),
            Tab::Messages => self.request_conversations(Priority::Medium, force),
            Tab::Profile => {}
        }
    }

    pub fn request_jobs(&mut self, force: bool) {
        if self.model.role().is_some_and(|r| r.recruits()) {
            return;
        }
        let jobs = &mut self.model.jobs;
        if jobs.loading || (jobs.loaded && !force) {
            return;
        }
        jobs.loading = true;
        self.send_request(ApiRequest::FetchJobs);
    }
}
