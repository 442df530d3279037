//! Profile editing logic
//!
//! Profiles are edited one text field at a time; this module lists the
//! editable fields per role, applies edited text back onto the typed profile,
//! and computes the completion percentage.

use thiserror::Error;

use crate::api::Profile;

/// One editable profile field as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub numeric: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileFieldError {
    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
}

fn text(key: &'static str, label: &'static str, value: &str) -> ProfileField {
    ProfileField {
        key,
        label,
        value: value.to_string(),
        numeric: false,
    }
}

fn number(key: &'static str, label: &'static str, value: u32) -> ProfileField {
    ProfileField {
        key,
        label,
        value: if value == 0 { String::new() } else { value.to_string() },
        numeric: true,
    }
}

/// Editable fields of a profile, in form order
pub fn profile_fields(profile: &Profile) -> Vec<ProfileField> {
    match profile {
        Profile::Individual(p) => vec![
            text("job_title", "Job title", &p.job_title),
            text("skills", "Skills (comma separated)", &p.skills.join(", ")),
            number("experience", "Experience (years)", p.experience),
            text("location", "Location", &p.location),
            text("education", "Education", &p.education),
            text("bio", "Bio", &p.bio),
        ],
        Profile::Company(p) => vec![
            text("industry", "Industry", &p.industry),
            text("size", "Company size", &p.size),
            text("location", "Location", &p.location),
            text("website", "Website", &p.website),
            number("founded_year", "Founded", p.founded_year),
            text("description", "Description", &p.description),
        ],
        Profile::Startup(p) => vec![
            text("industry", "Industry", &p.industry),
            text("stage", "Stage", &p.stage),
            text("location", "Location", &p.location),
            text("website", "Website", &p.website),
            number("founded_year", "Founded", p.founded_year),
            number("team_size", "Team size", p.team_size),
            text("funding", "Funding", &p.funding),
            text("description", "Description", &p.description),
        ],
    }
}

fn parse_number(label: &'static str, value: &str) -> Result<u32, ProfileFieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<u32>()
        .map_err(|_| ProfileFieldError::NotANumber(label))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write edited text for `key` back into the profile
pub fn apply_profile_field(
    profile: &mut Profile,
    key: &str,
    value: &str,
) -> Result<(), ProfileFieldError> {
    let trimmed = value.trim().to_string();
    match profile {
        Profile::Individual(p) => match key {
            "job_title" => p.job_title = trimmed,
            "skills" => p.skills = parse_list(value),
            "experience" => p.experience = parse_number("Experience (years)", value)?,
            "location" => p.location = trimmed,
            "education" => p.education = trimmed,
            "bio" => p.bio = trimmed,
            _ => return Err(ProfileFieldError::UnknownField(key.to_string())),
        },
        Profile::Company(p) => match key {
            "industry" => p.industry = trimmed,
            "size" => p.size = trimmed,
            "location" => p.location = trimmed,
            "website" => p.website = trimmed,
            "founded_year" => p.founded_year = parse_number("Founded", value)?,
            "description" => p.description = trimmed,
            _ => return Err(ProfileFieldError::UnknownField(key.to_string())),
        },
        Profile::Startup(p) => match key {
            "industry" => p.industry = trimmed,
            "stage" => p.stage = trimmed,
            "location" => p.location = trimmed,
            "website" => p.website = trimmed,
            "founded_year" => p.founded_year = parse_number("Founded", value)?,
            "team_size" => p.team_size = parse_number("Team size", value)?,
            "funding" => p.funding = trimmed,
            "description" => p.description = trimmed,
            _ => return Err(ProfileFieldError::UnknownField(key.to_string())),
        },
    }
    Ok(())
}

/// Apply a whole edited form; nothing changes unless every field applies
pub fn apply_profile_form<'a>(
    profile: &Profile,
    edits: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Profile, ProfileFieldError> {
    let mut updated = profile.clone();
    for (key, value) in edits {
        apply_profile_field(&mut updated, key, value)?;
    }
    Ok(updated)
}

/// Share of filled fields, 0..=100, rounded down
///
/// # Examples
/// ```
/// use nexttui::api::{Profile, UserType};
/// use nexttui::logic::profile::completion_percentage;
///
/// assert_eq!(completion_percentage(&Profile::empty(UserType::Company)), 0);
/// ```
pub fn completion_percentage(profile: &Profile) -> u8 {
    let fields = profile_fields(profile);
    if fields.is_empty() {
        return 0;
    }
    let filled = fields.iter().filter(|f| !f.value.trim().is_empty()).count();
    (filled * 100 / fields.len()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{IndividualProfile, StartupProfile, UserType};

    #[test]
    fn test_fields_per_role() {
        assert_eq!(profile_fields(&Profile::empty(UserType::Individual)).len(), 6);
        assert_eq!(profile_fields(&Profile::empty(UserType::Company)).len(), 6);
        assert_eq!(profile_fields(&Profile::empty(UserType::Startup)).len(), 8);
    }

    #[test]
    fn test_zero_numbers_render_empty() {
        let fields = profile_fields(&Profile::empty(UserType::Startup));
        let team = fields.iter().find(|f| f.key == "team_size").unwrap();
        assert!(team.numeric);
        assert_eq!(team.value, "");
    }

    #[test]
    fn test_apply_text_and_list_fields() {
        let mut profile = Profile::empty(UserType::Individual);
        apply_profile_field(&mut profile, "job_title", "  Data Engineer ").unwrap();
        apply_profile_field(&mut profile, "skills", "Rust, SQL,, Airflow ").unwrap();
        apply_profile_field(&mut profile, "experience", "4").unwrap();

        let Profile::Individual(p) = profile else {
            panic!("role changed");
        };
        assert_eq!(p.job_title, "Data Engineer");
        assert_eq!(p.skills, vec!["Rust", "SQL", "Airflow"]);
        assert_eq!(p.experience, 4);
    }

    #[test]
    fn test_apply_rejects_bad_number_and_unknown_key() {
        let mut profile = Profile::empty(UserType::Startup);
        assert_eq!(
            apply_profile_field(&mut profile, "team_size", "a dozen"),
            Err(ProfileFieldError::NotANumber("Team size"))
        );
        assert_eq!(
            apply_profile_field(&mut profile, "skills", "x"),
            Err(ProfileFieldError::UnknownField("skills".to_string()))
        );
    }

    #[test]
    fn test_apply_form_is_all_or_nothing() {
        let profile = Profile::empty(UserType::Startup);
        let result = apply_profile_form(&profile, [("industry", "Fintech"), ("founded_year", "soon")]);
        assert!(result.is_err());
        assert_eq!(profile, Profile::empty(UserType::Startup));

        let updated = apply_profile_form(&profile, [("industry", "Fintech"), ("founded_year", "2021")]).unwrap();
        let Profile::Startup(StartupProfile { industry, founded_year, .. }) = updated else {
            panic!("role changed");
        };
        assert_eq!(industry, "Fintech");
        assert_eq!(founded_year, 2021);
    }

    #[test]
    fn test_completion_percentage() {
        let mut profile = Profile::Individual(IndividualProfile {
            job_title: "Designer".to_string(),
            location: "Lisbon".to_string(),
            experience: 2,
            ..Default::default()
        });
        assert_eq!(completion_percentage(&profile), 50);

        for (key, value) in [("skills", "Figma"), ("education", "BA"), ("bio", "Hi")] {
            apply_profile_field(&mut profile, key, value).unwrap();
        }
        assert_eq!(completion_percentage(&profile), 100);
    }
}
