//! Session Model
//!
//! Who is signed in, which role they picked, and the onboarding flags that
//! survive restarts.

use serde::{Deserialize, Serialize};

use crate::api::{User, UserType};

/// Flags persisted in the local key-value store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingFlags {
    pub has_seen_splash: bool,
    pub has_seen_onboarding: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionModel {
    /// Authenticated user, if any
    pub user: Option<User>,

    /// Role chosen on the user type screen, used for sign-up
    pub selected_user_type: Option<UserType>,

    pub flags: OnboardingFlags,
}

impl SessionModel {
    pub fn new(flags: OnboardingFlags, user: Option<User>, selected_user_type: Option<UserType>) -> Self {
        Self {
            user,
            selected_user_type,
            flags,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user
    pub fn role(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn sign_in(&mut self, user: User) {
        self.selected_user_type = Some(user.user_type);
        self.user = Some(user);
    }

    /// Forget the user; onboarding flags stay
    pub fn sign_out(&mut self) {
        self.user = None;
        self.selected_user_type = None;
    }

    pub fn set_profile_completed(&mut self, completed: bool) {
        if let Some(user) = self.user.as_mut() {
            user.profile_completed = completed;
        }
    }
}
