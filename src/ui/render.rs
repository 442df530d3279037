use chrono::Utc;
use nexttui::logic::auth::greeting_name;
use nexttui::{Screen, Tab};
use ratatui::Frame;

use super::{
    calendar, deck, dialogs, forms, intro, jobs, layout,
    legend::{self, LegendContext},
    messages, profile, tabs, toast,
};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    match app.model.ui.screen {
        Screen::Splash => intro::render_splash(f),
        Screen::Onboarding => intro::render_onboarding(f, app.model.ui.onboarding_slide),
        Screen::Welcome => intro::render_welcome(f),
        Screen::UserType => intro::render_user_type(f, app.model.ui.user_type_index),
        Screen::Login | Screen::Signup => {
            if let Some(form) = &app.model.ui.form {
                let role = app.model.session.selected_user_type.map(|t| t.label());
                forms::render_auth_screen(f, form, role);
            }
        }
        Screen::Home => render_home(f, app),
    }

    // Toast notifications go on top of everything
    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, f.area(), message);
    }
}

fn render_home(f: &mut Frame, app: &mut App) {
    let Some(role) = app.model.role() else {
        return;
    };
    let size = f.area();

    let legend_ctx = LegendContext {
        vim_mode: app.model.ui.vim_mode,
        tab: app.model.ui.tab,
        detail_open: match app.model.ui.tab {
            Tab::Jobs => app.model.jobs.details_open,
            Tab::Messages => app.model.messages.thread.is_some(),
            _ => false,
        },
        composing: app.model.ui.composing,
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_home_layout(size, legend_height);

    tabs::render_tabs(
        f,
        layout_info.tabs_area,
        role,
        app.model.ui.tab,
        app.model.messages.total_unread(),
    );

    let body = layout_info.body_area;
    match app.model.ui.tab {
        Tab::Jobs => {
            let name = app.model.session.user.as_ref().map(|u| u.name.as_str());
            let completion =
                (!app.model.profile.is_complete()).then(|| app.model.profile.completion());
            let model = &app.model.jobs;
            jobs::render_jobs(
                f,
                body,
                &greeting_name(name),
                completion,
                &model.jobs,
                model.selected,
                model.details_open,
                model.loading,
            );
        }
        Tab::Candidates => {
            let discover = &mut app.model.discover;
            app.model.ui.card_area = deck::render_deck(
                f,
                body,
                &mut discover.deck,
                &discover.ledger,
                discover.loading,
                app.model.ui.tab.title(role),
            );
        }
        Tab::Calendar => {
            let model = &app.model.calendar;
            calendar::render_calendar(f, body, &model.events, model.selected, model.loading);
        }
        Tab::Messages => {
            let user_id = app.model.session.user_id().unwrap_or_default();
            messages::render_messages(
                f,
                body,
                &app.model.messages,
                user_id,
                app.model.ui.composing,
                Utc::now(),
            );
        }
        Tab::Profile => profile::render_profile(
            f,
            body,
            app.model.session.user.as_ref(),
            app.model.profile.profile.as_ref(),
            app.model.profile.completion(),
        ),
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    // Popups last so they cover the tab content
    if let Some(form) = app.model.ui.form.as_ref().filter(|form| form.kind.is_popup()) {
        forms::render_form_popup(f, form);
    }
    if let Some((_id, title)) = &app.model.ui.confirm_delete_event {
        dialogs::render_delete_event_confirmation(f, title);
    }
}
