//! Integration tests for the session flow across restarts
//!
//! These tests verify the complete flow:
//! 1. First launch: splash → onboarding → user type → sign up
//! 2. Flags and session persist in the state database
//! 3. Next launch routes a signed-in user straight home
//! 4. Logout keeps onboarding flags but forgets the user

use nexttui::api::{Profile, User, UserType};
use nexttui::config::Config;
use nexttui::logic::navigation::{home_tab, route_after_splash, route_after_user_type};
use nexttui::logic::profile::{apply_profile_form, completion_percentage, profile_fields};
use nexttui::model::{Model, DeckSettings, SessionModel};
use nexttui::storage::StateDb;
use nexttui::{Screen, Tab};

fn company_user() -> User {
    User {
        id: "u-42".to_string(),
        email: "talent@acme.test".to_string(),
        name: "Acme Talent".to_string(),
        user_type: UserType::Company,
        profile_completed: false,
        profile_image: None,
    }
}

#[test]
fn test_first_launch_then_signed_in_relaunch() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("state.db");

    // First launch
    {
        let store = StateDb::open(&db_path).unwrap();
        let flags = store.load_flags().unwrap();
        assert!(!flags.has_seen_splash);
        assert_eq!(
            route_after_splash(None, flags.has_seen_onboarding),
            Screen::Onboarding
        );

        let mut session = SessionModel::new(flags, None, None);
        session.flags.has_seen_splash = true;
        session.flags.has_seen_onboarding = true;
        store.save_flags(session.flags).unwrap();

        session.selected_user_type = Some(UserType::Company);
        store.save_user_type(UserType::Company).unwrap();
        assert_eq!(route_after_user_type(session.is_authenticated()), Screen::Signup);

        let user = company_user();
        store.save_session(&user).unwrap();
        session.sign_in(user);
        assert_eq!(session.role(), Some(UserType::Company));
    }

    // Relaunch
    let store = StateDb::open(&db_path).unwrap();
    let flags = store.load_flags().unwrap();
    let user = store.load_session().unwrap();
    assert!(flags.has_seen_splash && flags.has_seen_onboarding);
    assert_eq!(user.as_ref(), Some(&company_user()));
    assert_eq!(store.load_user_type().unwrap(), Some(UserType::Company));
    assert_eq!(route_after_splash(user.as_ref(), true), Screen::Home);
    assert_eq!(home_tab(UserType::Company), Tab::Candidates);
}

#[test]
fn test_logout_keeps_onboarding_flags() {
    let store = StateDb::in_memory().unwrap();
    let mut model = Model::new(false, DeckSettings::default());

    model.session.flags.has_seen_splash = true;
    model.session.flags.has_seen_onboarding = true;
    store.save_flags(model.session.flags).unwrap();
    store.save_session(&company_user()).unwrap();
    model.session.sign_in(company_user());
    model.profile.ensure_for(UserType::Company);

    // Logout
    store.clear_session().unwrap();
    model.session.sign_out();
    model.clear_user_data();

    assert!(store.load_session().unwrap().is_none());
    assert!(store.load_flags().unwrap().has_seen_onboarding);
    assert!(!model.session.is_authenticated());
    assert!(model.profile.profile.is_none());
    assert_eq!(
        route_after_splash(None, model.session.flags.has_seen_onboarding),
        Screen::Welcome
    );
}

#[test]
fn test_reset_onboarding_shows_intro_again() {
    let store = StateDb::in_memory().unwrap();
    let mut flags = store.load_flags().unwrap();
    flags.has_seen_splash = true;
    flags.has_seen_onboarding = true;
    store.save_flags(flags).unwrap();

    store.reset_onboarding().unwrap();
    let flags = store.load_flags().unwrap();
    assert_eq!(route_after_splash(None, flags.has_seen_onboarding), Screen::Onboarding);
}

#[test]
fn test_completed_profile_persists_with_session() {
    let store = StateDb::in_memory().unwrap();
    let mut session = SessionModel::default();
    session.sign_in(company_user());

    let profile = Profile::empty(UserType::Company);
    let edits: Vec<(&str, String)> = profile_fields(&profile)
        .into_iter()
        .map(|field| {
            let value = if field.numeric { "1998" } else { "filled" };
            (field.key, value.to_string())
        })
        .collect();
    let profile =
        apply_profile_form(&profile, edits.iter().map(|(k, v)| (*k, v.as_str()))).unwrap();
    assert_eq!(completion_percentage(&profile), 100);

    session.set_profile_completed(true);
    store.save_session(session.user.as_ref().unwrap()).unwrap();
    assert!(store.load_session().unwrap().unwrap().profile_completed);
}

#[test]
fn test_config_file_drives_deck_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "vim_mode: true\ngateway_latency_ms: 0\nswipe:\n  threshold_ratio: 0.4\n  exit_duration_ms: 120\n",
    )
    .unwrap();

    let (config, found) = Config::load(path.to_str()).unwrap();
    assert_eq!(found.as_deref(), Some(path.as_path()));
    assert!(config.vim_mode);

    let settings = config.deck_settings();
    assert_eq!(settings.threshold_ratio, 0.4);
    assert_eq!(settings.exit_duration.as_millis(), 120);
    assert_eq!(settings.spring_tension, 40.0);
}

#[test]
fn test_config_rejects_bad_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "swipe:\n  threshold_ratio: 1.5\n").unwrap();

    assert!(Config::load(path.to_str()).is_err());
    assert!(Config::load(Some("/definitely/not/here.yaml")).is_err());
}
