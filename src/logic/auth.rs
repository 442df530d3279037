//! Login and sign-up form checks
//!
//! Only presence and password confirmation are checked here; whether the
//! credentials are any good is the gateway's call.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthFormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Message shown when the gateway rejects a login
pub const LOGIN_FAILED: &str = "Invalid email or password";

/// Message shown when the gateway rejects a sign-up
pub const SIGNUP_FAILED: &str = "Failed to create account";

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthFormError> {
    if blank(email) || password.is_empty() {
        return Err(AuthFormError::MissingFields);
    }
    Ok(())
}

pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), AuthFormError> {
    if blank(name) || blank(email) || password.is_empty() || confirm_password.is_empty() {
        return Err(AuthFormError::MissingFields);
    }
    if password != confirm_password {
        return Err(AuthFormError::PasswordMismatch);
    }
    Ok(())
}

/// First name for the home greeting, "User" when unknown
pub fn greeting_name(name: Option<&str>) -> String {
    name.and_then(|n| n.split_whitespace().next())
        .unwrap_or("User")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(validate_login("", "pw"), Err(AuthFormError::MissingFields));
        assert_eq!(validate_login("  ", "pw"), Err(AuthFormError::MissingFields));
        assert_eq!(validate_login("a@b.c", ""), Err(AuthFormError::MissingFields));
        assert_eq!(validate_login("a@b.c", "pw"), Ok(()));
    }

    #[test]
    fn test_signup_checks_presence_before_match() {
        assert_eq!(
            validate_signup("", "a@b.c", "x", "y"),
            Err(AuthFormError::MissingFields)
        );
        assert_eq!(
            validate_signup("Ada", "a@b.c", "x", ""),
            Err(AuthFormError::MissingFields)
        );
    }

    #[test]
    fn test_signup_password_mismatch() {
        assert_eq!(
            validate_signup("Ada", "a@b.c", "secret", "secreT"),
            Err(AuthFormError::PasswordMismatch)
        );
        assert_eq!(validate_signup("Ada", "a@b.c", "secret", "secret"), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthFormError::MissingFields.to_string(), "Please fill in all fields");
        assert_eq!(AuthFormError::PasswordMismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_greeting_name() {
        assert_eq!(greeting_name(Some("Ada Lovelace")), "Ada");
        assert_eq!(greeting_name(Some("  ")), "User");
        assert_eq!(greeting_name(None), "User");
    }
}
