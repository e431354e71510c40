//! Local form validation
//!
//! Validation failures are caught before any network call and surfaced
//! inline; they never produce an HTTP request.

use std::sync::OnceLock;

use regex::Regex;

use crate::utils::errors::{CampusHubError, Result};

const MIN_PASSWORD_LENGTH: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // Same shape the backend enforces on user emails
        Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("valid email regex")
    })
}

/// Require a non-empty trimmed value for a named field
pub fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CampusHubError::InvalidInput(format!(
            "Please provide your {name}"
        )));
    }
    Ok(())
}

/// Validate an email address shape
pub fn validate_email(email: &str) -> Result<()> {
    require_field("email", email)?;
    if !email_regex().is_match(email.trim()) {
        return Err(CampusHubError::InvalidInput(
            "Please add a valid email".to_string(),
        ));
    }
    Ok(())
}

/// Validate password length and confirmation match
pub fn validate_password(password: &str, confirmation: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(CampusHubError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    if password != confirmation {
        return Err(CampusHubError::InvalidInput(
            "Passwords do not match".to_string(),
        ));
    }
    Ok(())
}

/// Validate login form input before hitting the network
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CampusHubError::InvalidInput(
            "Please provide email and password".to_string(),
        ));
    }
    Ok(())
}
