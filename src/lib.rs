//! N.E.X.T terminal client library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;
pub mod storage;

use api::UserType;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Welcome,
    UserType,
    Login,
    Signup,
    Home, // Role home with tabs
}

/// Tab inside the role home
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Jobs,       // Individuals only
    Candidates, // Companies and startups only
    Calendar,
    Messages,
    Profile,
}

impl Tab {
    pub fn title(&self, role: UserType) -> &'static str {
        match self {
            Tab::Jobs => "Jobs",
            Tab::Candidates => match role {
                UserType::Startup => "Talent",
                _ => "Candidates",
            },
            Tab::Calendar => "Calendar",
            Tab::Messages => "Messages",
            Tab::Profile => match role {
                UserType::Individual => "Profile",
                UserType::Company => "Company",
                UserType::Startup => "Startup",
            },
        }
    }
}
