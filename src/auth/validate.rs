//! Local form validation for the login and registration paths.
//!
//! Rejecting bad input here means no network round trip for requests
//! the backend would refuse anyway. Rules mirror the registration
//! screens: login accepts shorter passwords than registration, and
//! coach accounts carry extra required fields.

use std::collections::BTreeMap;

use crate::models::{LoginRequest, RegisterRequest, Role};

/// Field name -> human-readable message. BTreeMap keeps iteration
/// order stable for display and assertions.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Login accepts legacy accounts with shorter passwords
const MIN_LOGIN_PASSWORD_LEN: usize = 6;

/// Registration enforces the current minimum
const MIN_REGISTER_PASSWORD_LEN: usize = 8;

const MIN_AGE: i32 = 13;
const MAX_AGE: i32 = 100;

/// Minimal `x@y.z` shape check; real validation is the backend's job.
fn is_valid_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_login(credentials: &LoginRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if credentials.email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(&credentials.email) {
        errors.insert("email", "Please enter a valid email".to_string());
    }

    if credentials.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if credentials.password.len() < MIN_LOGIN_PASSWORD_LEN {
        errors.insert(
            "password",
            format!("Password must be at least {} characters", MIN_LOGIN_PASSWORD_LEN),
        );
    }

    errors
}

pub fn validate_registration(data: &RegisterRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if data.first_name.trim().is_empty() {
        errors.insert("firstname", "First name is required".to_string());
    }
    if data.last_name.trim().is_empty() {
        errors.insert("lastname", "Last name is required".to_string());
    }
    if data.email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !is_valid_email(&data.email) {
        errors.insert("email", "Invalid email".to_string());
    }
    if data.tel.is_empty() {
        errors.insert("tel", "Phone number is required".to_string());
    }
    if data.address.trim().is_empty() {
        errors.insert("address", "Address is required".to_string());
    }
    if data.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if data.password.len() < MIN_REGISTER_PASSWORD_LEN {
        errors.insert(
            "password",
            format!(
                "Password must be at least {} characters",
                MIN_REGISTER_PASSWORD_LEN
            ),
        );
    }
    if data.age < MIN_AGE || data.age > MAX_AGE {
        errors.insert(
            "age",
            format!("Age must be between {}-{}", MIN_AGE, MAX_AGE),
        );
    }
    if data.gender.is_empty() {
        errors.insert("gender", "Gender is required".to_string());
    }
    if data.weight.is_none() {
        errors.insert("weight", "Weight is required".to_string());
    }
    if data.height.is_none() {
        errors.insert("height", "Height is required".to_string());
    }
    if data.activity_level.as_deref().map_or(true, |level| level.trim().is_empty()) {
        errors.insert("activityLevel", "Activity level is required".to_string());
    }

    if data.role == Role::Coach {
        if data.certification.as_deref().map_or(true, |c| c.trim().is_empty()) {
            errors.insert(
                "certification",
                "Certification is required for coaches".to_string(),
            );
        }
        if data.specialities.as_deref().map_or(true, |s| s.trim().is_empty()) {
            errors.insert(
                "specialities",
                "Specialities are required for coaches".to_string(),
            );
        }
        if data.price.as_deref().map_or(true, |p| p.is_empty()) {
            errors.insert("price", "Price is required for coaches".to_string());
        }
    }

    errors
}
