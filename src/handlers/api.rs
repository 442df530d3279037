//! API Response Handler
//!
//! Handles responses from the gateway background service.
//! Each response updates the matching sub-model; failures become toasts or
//! inline form errors.

use nexttui::logic::auth::{LOGIN_FAILED, SIGNUP_FAILED};
use nexttui::model::FormKind;
use nexttui::services::ApiResponse;

use crate::App;

/// Handle API response from background service
///
/// Response types:
/// - LoginResult / SignupResult: auth forms
/// - CandidatesResult / DecisionResult: candidate deck
/// - JobsResult: recommended jobs
/// - ConversationsResult / MessagesResult / MessageSent: messaging
/// - EventsResult / EventSaved / EventDeleted: calendar
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::LoginResult { user } | ApiResponse::SignupResult { user } => {
            let failure_text = match app.model.ui.form.as_ref().map(|f| &f.kind) {
                Some(FormKind::Signup) => SIGNUP_FAILED,
                _ => LOGIN_FAILED,
            };

            match user {
                Ok(user) => app.complete_sign_in(user),
                Err(e) => {
                    tracing::warn!("Authentication failed: {}", e);
                    if let Some(form) = app.model.ui.form.as_mut() {
                        form.submitting = false;
                        form.error = Some(failure_text.to_string());
                    }
                }
            }
        }

        ApiResponse::CandidatesResult { pool, candidates } => {
            // Role changed (logout/login) while the request was out
            if app.model.role() != Some(pool) {
                tracing::debug!("Dropping candidates for stale pool {}", pool.as_str());
                return;
            }

            match candidates {
                Ok(candidates) => {
                    tracing::debug!("Loaded {} candidates", candidates.len());
                    app.model.discover.load(pool, candidates);
                }
                Err(e) => {
                    app.model.discover.loading = false;
                    app.toast_error(e);
                }
            }
        }

        ApiResponse::DecisionResult {
            candidate_id,
            decision,
            result,
        } => {
            // The ledger already has it; only the gateway copy failed
            if let Err(e) = result {
                tracing::warn!(
                    "Failed to record {} for {}: {}",
                    decision.as_str(),
                    candidate_id,
                    e
                );
                app.toast_error(e);
            }
        }

        ApiResponse::JobsResult { jobs } => match jobs {
            Ok(jobs) => app.model.jobs.load(jobs),
            Err(e) => {
                app.model.jobs.loading = false;
                app.toast_error(e);
            }
        },

        ApiResponse::ConversationsResult {
            user_id,
            conversations,
        } => {
            if app.model.session.user_id() != Some(user_id.as_str()) {
                return;
            }
            match conversations {
                Ok(conversations) => app.model.messages.load(conversations),
                Err(e) => {
                    app.model.messages.loading = false;
                    app.toast_error(e);
                }
            }
        }

        ApiResponse::MessagesResult {
            conversation_id,
            messages,
        } => match messages {
            Ok(messages) => app.model.messages.load_thread(&conversation_id, messages),
            Err(e) => {
                if let Some(thread) = app.model.messages.thread.as_mut() {
                    thread.loading = false;
                }
                app.toast_error(e);
            }
        },

        ApiResponse::MessageSent { title, sent } => match sent {
            Ok((conversation_id, message)) => {
                app.model.messages.record_sent(&conversation_id, message, &title);
            }
            Err(e) => {
                app.model.messages.sending = false;
                app.toast_error(e);
            }
        },

        ApiResponse::EventsResult { events } => match events {
            Ok(events) => app.model.calendar.load(events),
            Err(e) => {
                app.model.calendar.loading = false;
                app.toast_error(e);
            }
        },

        ApiResponse::EventSaved { created, event } => match event {
            Ok(event) => {
                let verb = if created { "added" } else { "updated" };
                let message = format!("Event {}: {}", verb, event.title);
                app.model.calendar.upsert(event);
                app.model.ui.form = None;
                app.model.show_toast(message);
            }
            Err(e) => match app.model.ui.form.as_mut() {
                Some(form) => {
                    form.submitting = false;
                    form.error = Some(e.to_string());
                }
                None => app.toast_error(e),
            },
        },

        ApiResponse::EventDeleted { id, result } => match result {
            Ok(()) => {
                app.model.calendar.remove(&id);
                app.model.show_toast("Event deleted".to_string());
            }
            Err(e) => app.toast_error(e),
        },
    }
}
