//! # Field input filters and save-time validation
//!
//! Two separate concerns live here:
//!
//! | Function | When it runs | Effect |
//! |----------|--------------|--------|
//! | [`filter_input`] | on every keystroke | strips characters a field can never hold |
//! | [`validate`] | on save only | checks emptiness and format, one rule per field |
//!
//! Validation evaluates every field even when an earlier one fails, so the
//! editor can flag all offending inputs at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Field, ProfileRecord};

/// Maximum number of digits kept in the phone field.
pub const PHONE_MAX_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid digits pattern"));

/// Keeps letters and whitespace only.
pub fn filter_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect()
}

/// Keeps ASCII digits only, capped at [`PHONE_MAX_LEN`].
pub fn filter_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(PHONE_MAX_LEN)
        .collect()
}

/// Apply the live input filter for `field`. Email is passed through as typed.
pub fn filter_input(field: Field, raw: &str) -> String {
    match field {
        Field::Name => filter_name(raw),
        Field::Phone => filter_phone(raw),
        Field::Email => raw.to_string(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    /// Translation key for the inline message shown under `field`.
    pub fn message_key(&self, field: Field) -> &'static str {
        match (field, self) {
            // Names have no format rule beyond the live filter.
            (Field::Name, _) => "errors.name_required",
            (Field::Email, FieldError::Required) => "errors.email_required",
            (Field::Email, FieldError::InvalidFormat) => "errors.email_invalid",
            (Field::Phone, FieldError::Required) => "errors.phone_required",
            (Field::Phone, FieldError::InvalidFormat) => "errors.phone_invalid",
        }
    }
}

/// Per-field error flags. `None` means the field is clear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    name.trim().is_empty().then_some(FieldError::Required)
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::Required)
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

fn check_phone(phone: &str) -> Option<FieldError> {
    if phone.trim().is_empty() {
        Some(FieldError::Required)
    } else if !DIGITS_RE.is_match(phone) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    }
}

/// Run all three field rules independently.
pub fn validate(record: &ProfileRecord) -> FieldErrors {
    FieldErrors {
        name: check_name(&record.name),
        email: check_email(&record.email),
        phone: check_phone(&record.phone),
    }
}
