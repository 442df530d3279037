//! Profile Model
//!
//! The signed-in user's role profile. Kept in memory only.

use crate::api::{Profile, UserType};
use crate::logic::profile::completion_percentage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileModel {
    pub profile: Option<Profile>,
}

impl ProfileModel {
    /// Make sure a profile exists for `role`, replacing one of another role
    pub fn ensure_for(&mut self, role: UserType) -> &Profile {
        let stale = self.profile.as_ref().map_or(true, |p| p.user_type() != role);
        if stale {
            self.profile = Some(Profile::empty(role));
        }
        self.profile.get_or_insert_with(|| Profile::empty(role))
    }

    pub fn completion(&self) -> u8 {
        self.profile.as_ref().map_or(0, completion_percentage)
    }

    pub fn is_complete(&self) -> bool {
        self.completion() >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_for_role() {
        let mut model = ProfileModel::default();
        assert_eq!(model.completion(), 0);

        assert_eq!(model.ensure_for(UserType::Company).user_type(), UserType::Company);
        assert_eq!(model.ensure_for(UserType::Individual).user_type(), UserType::Individual);
        assert!(!model.is_complete());
    }
}
