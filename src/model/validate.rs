//! Pure field validators for the membership and contact forms.
//!
//! Each validator is a total function over its input string; malformed
//! input is a `false`, never an error. URL validity is defined as
//! "the `url` crate can parse it".

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum accepted length for the contact form message body.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Graduation years are accepted up to this many years ahead.
pub const GRADUATION_WINDOW_YEARS: i32 = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("phone regex"));

static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8,10}$").expect("student id regex"));

/// Well-formed email: one `@`, non-empty local part, dotted domain.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone number after stripping spaces, dashes, and parentheses:
/// optional `+`, leading non-zero digit, at most 16 digits total.
pub fn validate_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    PHONE_RE.is_match(&stripped)
}

/// A URL is valid iff it parses.
pub fn validate_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok()
}

/// Student IDs are 8 to 10 digits.
pub fn validate_student_id(student_id: &str) -> bool {
    STUDENT_ID_RE.is_match(student_id)
}

/// Graduation year must fall within `[year, year + 6]` of `now`.
pub fn validate_graduation_year_at(year: i32, current_year: i32) -> bool {
    year >= current_year && year <= current_year + GRADUATION_WINDOW_YEARS
}

/// Graduation year check against the wall clock.
pub fn validate_graduation_year(year: i32) -> bool {
    validate_graduation_year_at(year, chrono::Utc::now().year())
}

/// Message body must carry at least [`MIN_MESSAGE_LEN`] characters.
pub fn validate_message(message: &str) -> bool {
    message.chars().count() >= MIN_MESSAGE_LEN
}
