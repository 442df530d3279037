//! Profile editing

use nexttui::logic::profile::{apply_profile_form, profile_fields};
use nexttui::model::{FormKind, FormState};

use crate::App;

impl App {
    pub fn open_profile_form(&mut self) {
        let Some(role) = self.model.role() else {
            return;
        };
        let fields = profile_fields(self.model.profile.ensure_for(role));
        self.model.ui.form = Some(FormState::profile(fields));
    }

    /// Apply the edited fields; a bad field leaves the profile untouched
    pub fn submit_profile_form(&mut self) {
        let Some(form) = self.model.ui.form.as_mut() else {
            return;
        };
        if form.kind != FormKind::Profile {
            return;
        }
        let Some(profile) = self.model.profile.profile.as_ref() else {
            return;
        };

        let updated = match apply_profile_form(profile, form.entries()) {
            Ok(updated) => updated,
            Err(e) => {
                form.error = Some(e.to_string());
                return;
            }
        };

        self.model.profile.profile = Some(updated);
        self.model.ui.form = None;

        let completion = self.model.profile.completion();
        tracing::debug!("Profile saved, {}% complete", completion);

        let completed = self.model.profile.is_complete();
        let was_completed = self
            .model
            .session
            .user
            .as_ref()
            .is_some_and(|u| u.profile_completed);
        if completed != was_completed {
            self.model.session.set_profile_completed(completed);
            if let Some(user) = &self.model.session.user {
                if let Err(e) = self.store.save_session(user) {
                    tracing::warn!("Failed to save session: {:#}", e);
                }
            }
        }

        let message = if completed {
            "Profile complete".to_string()
        } else {
            format!("Profile saved ({}% complete)", completion)
        };
        self.model.show_toast(message);
    }
}
