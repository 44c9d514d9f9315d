//! Local checks run on the sign-up form before anything is sent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length of a phone number, in digits
pub const PHONE_DIGITS: usize = 10;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("Failed to compile email regex")
});

/// Phone number rule enforced by the form.
///
/// Both rules require exactly ten ASCII digits; `LeadingZero` also requires
/// the first digit to be `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhoneRule {
    #[default]
    LeadingZero,
    TenDigits,
}

impl fmt::Display for PhoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeadingZero => write!(f, "leading-zero"),
            Self::TenDigits => write!(f, "ten-digits"),
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str, rule: PhoneRule) -> bool {
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match rule {
        PhoneRule::LeadingZero => phone.starts_with('0'),
        PhoneRule::TenDigits => true,
    }
}

/// Which form fields failed validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub position: bool,
    pub photo: bool,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        !(self.name || self.email || self.phone || self.position || self.photo)
    }

    /// Names of the failing fields, in form order
    pub fn fields(&self) -> Vec<&'static str> {
        [
            (self.name, "name"),
            (self.email, "email"),
            (self.phone, "phone"),
            (self.position, "position"),
            (self.photo, "photo"),
        ]
        .into_iter()
        .filter_map(|(failed, field)| failed.then_some(field))
        .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid fields: {}", self.fields().join(", "))
    }
}

/// Human-readable hint for a failing field
pub fn field_hint(field: &str, rule: PhoneRule) -> &'static str {
    match (field, rule) {
        ("name", _) => "Required field",
        ("email", _) => "Invalid email format",
        ("phone", PhoneRule::LeadingZero) => "Enter 10 digits starting with 0",
        ("phone", PhoneRule::TenDigits) => "Enter 10 digits",
        ("position", _) => "Select a position",
        ("photo", _) => "Photo is required",
        _ => "Invalid value",
    }
}
