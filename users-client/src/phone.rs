//! Phone number input handling.
//!
//! The form stores bare digits; the `+38 (XXX) XXX-XX-XX` decoration is only
//! applied for display.

use crate::validation::PHONE_DIGITS;

/// Country prefix shown in front of the local number
pub const COUNTRY_PREFIX: &str = "+38";

/// Reduce input to the bare local number: drop the country prefix, keep only
/// ASCII digits and cap the result at ten of them.
///
/// The prefix is dropped when the input starts with `+38`, or when it carries
/// more than ten digits starting with `38`.
pub fn sanitize_phone_input(input: &str) -> String {
    let trimmed = input.trim_start();
    let local = trimmed.strip_prefix(COUNTRY_PREFIX).unwrap_or(trimmed);
    let digits: String = local.chars().filter(char::is_ascii_digit).collect();

    let digits = match digits.strip_prefix(&COUNTRY_PREFIX[1..]) {
        Some(rest) if digits.len() > PHONE_DIGITS => rest,
        _ => digits.as_str(),
    };
    digits.chars().take(PHONE_DIGITS).collect()
}

/// Render (possibly partial) digits as `+38 (XXX) XXX-XX-XX`.
///
/// Digits beyond the tenth are ignored; an empty input renders as an empty
/// string.
pub fn format_phone(digits: &str) -> String {
    let digits = sanitize_phone_input(digits);
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(19);
    out.push_str(COUNTRY_PREFIX);
    out.push_str(" (");
    for (i, digit) in digits.chars().enumerate() {
        match i {
            3 => out.push_str(") "),
            6 | 8 => out.push('-'),
            _ => {}
        }
        out.push(digit);
    }
    out
}
