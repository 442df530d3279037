//! Session flow: splash, onboarding, role choice, login, sign-up, logout

use std::time::Instant;

use nexttui::api::{SignupRequest, User, UserType};
use nexttui::logic::auth::{validate_login, validate_signup};
use nexttui::logic::navigation::{next_onboarding_slide, route_after_splash, route_after_user_type};
use nexttui::logic::ui::splash_elapsed;
use nexttui::model::FormKind;
use nexttui::services::ApiRequest;
use nexttui::Screen;

use crate::App;

impl App {
    fn persist_flags(&self) {
        if let Err(e) = self.store.save_flags(self.model.session.flags) {
            tracing::warn!("Failed to save onboarding flags: {:#}", e);
        }
    }

    /// Leave the splash once its time is up
    pub fn tick_splash(&mut self, now: Instant) {
        if self.model.ui.screen == Screen::Splash
            && splash_elapsed(self.model.ui.screen_entered_at, now)
        {
            self.advance_from_splash();
        }
    }

    pub fn advance_from_splash(&mut self) {
        self.model.session.flags.has_seen_splash = true;
        self.persist_flags();

        let next = route_after_splash(
            self.model.session.user.as_ref(),
            self.model.session.flags.has_seen_onboarding,
        );
        tracing::debug!("Splash done, routing to {:?}", next);

        if next == Screen::Home {
            self.enter_home();
        } else {
            self.model.ui.go_to(next);
        }
    }

    pub fn next_onboarding_slide(&mut self) {
        match next_onboarding_slide(self.model.ui.onboarding_slide) {
            Some(slide) => self.model.ui.onboarding_slide = slide,
            None => self.finish_onboarding(),
        }
    }

    pub fn prev_onboarding_slide(&mut self) {
        self.model.ui.onboarding_slide = self.model.ui.onboarding_slide.saturating_sub(1);
    }

    /// Onboarding completed or skipped
    pub fn finish_onboarding(&mut self) {
        self.model.session.flags.has_seen_onboarding = true;
        self.persist_flags();
        self.model.ui.go_to(Screen::UserType);
    }

    pub fn choose_user_type(&mut self) {
        let user_type = self.model.ui.selected_user_type();
        self.model.session.selected_user_type = Some(user_type);
        if let Err(e) = self.store.save_user_type(user_type) {
            tracing::warn!("Failed to save user type: {:#}", e);
        }

        match route_after_user_type(self.model.session.is_authenticated()) {
            Screen::Home => self.enter_home(),
            screen => self.model.ui.go_to(screen),
        }
    }

    pub fn submit_login(&mut self) {
        let Some(form) = self.model.ui.form.as_mut() else {
            return;
        };
        if form.kind != FormKind::Login || form.submitting {
            return;
        }

        let email = form.value("email").trim().to_string();
        let password = form.value("password").to_string();
        if let Err(e) = validate_login(&email, &password) {
            form.error = Some(e.to_string());
            return;
        }

        form.submitting = true;
        form.error = None;
        self.send_request(ApiRequest::Login { email, password });
    }

    pub fn submit_signup(&mut self) {
        let user_type = self
            .model
            .session
            .selected_user_type
            .unwrap_or(UserType::Individual);

        let Some(form) = self.model.ui.form.as_mut() else {
            return;
        };
        if form.kind != FormKind::Signup || form.submitting {
            return;
        }

        let name = form.value("name").trim().to_string();
        let email = form.value("email").trim().to_string();
        let password = form.value("password").to_string();
        if let Err(e) = validate_signup(&name, &email, &password, form.value("confirm_password")) {
            form.error = Some(e.to_string());
            return;
        }

        form.submitting = true;
        form.error = None;
        self.send_request(ApiRequest::Signup(SignupRequest {
            name,
            email,
            password,
            user_type,
        }));
    }

    /// The gateway accepted a login or sign-up
    pub fn complete_sign_in(&mut self, user: User) {
        tracing::info!("Signed in as {} ({})", user.id, user.user_type.as_str());
        if let Err(e) = self.store.save_session(&user) {
            tracing::warn!("Failed to save session: {:#}", e);
        }

        self.model.profile.ensure_for(user.user_type);
        self.model.session.sign_in(user);
        self.enter_home();
    }

    pub fn logout(&mut self) {
        tracing::info!("Logging out");
        if let Err(e) = self.store.clear_session() {
            tracing::warn!("Failed to clear session: {:#}", e);
        }

        self.model.session.sign_out();
        self.model.clear_user_data();
        self.model.ui.go_to(Screen::Welcome);
    }
}
