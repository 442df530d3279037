//! Calendar event forms and deletion

use chrono::Local;
use nexttui::api::CalendarEventPatch;
use nexttui::logic::calendar::parse_event_form;
use nexttui::model::{FormKind, FormState};
use nexttui::services::ApiRequest;

use crate::App;

impl App {
    pub fn request_events(&mut self, force: bool) {
        let calendar = &mut self.model.calendar;
        if calendar.loading || (calendar.loaded && !force) {
            return;
        }
        calendar.loading = true;
        self.send_request(ApiRequest::FetchEvents);
    }

    pub fn open_new_event_form(&mut self) {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        self.model.ui.form = Some(FormState::new_event(&today));
    }

    pub fn open_edit_event_form(&mut self) {
        if let Some(event) = self.model.calendar.selected_event() {
            self.model.ui.form = Some(FormState::edit_event(event));
        }
    }

    pub fn submit_event_form(&mut self) {
        let user_id = self.model.session.user_id().map(str::to_string);
        let Some(form) = self.model.ui.form.as_mut() else {
            return;
        };
        if form.submitting {
            return;
        }

        let participants = user_id.into_iter().collect();
        let event = match parse_event_form(&form.event_input(), participants) {
            Ok(event) => event,
            Err(e) => {
                form.error = Some(e.to_string());
                return;
            }
        };

        let request = match &form.kind {
            FormKind::NewEvent => ApiRequest::AddEvent(event),
            FormKind::EditEvent(id) => ApiRequest::UpdateEvent {
                id: id.clone(),
                patch: CalendarEventPatch::replace_with(&event),
            },
            _ => return,
        };

        form.submitting = true;
        self.send_request(request);
    }

    pub fn ask_delete_event(&mut self) {
        if let Some(event) = self.model.calendar.selected_event() {
            self.model.ui.confirm_delete_event = Some((event.id.clone(), event.title.clone()));
        }
    }

    pub fn confirm_delete_event(&mut self) {
        if let Some((id, title)) = self.model.ui.confirm_delete_event.take() {
            tracing::info!("Deleting event {} ({})", id, title);
            self.send_request(ApiRequest::DeleteEvent { id });
        }
    }
}
