//! Format validators and normalizers
//!
//! Pure predicates and conversions used by the document generators:
//! - E-mail syntax
//! - Norwegian mobile numbers (lenient about `+47` / `0047` prefixes)
//! - ISO `yyyy-mm-dd` to dotted `dd.mm.yyyy` date conversion
//! - Numeric-looking values to canonical strings

use crate::config::{MOBILE_NUMBER_DIGITS, ORGANIZATION_NUMBER_LENGTH};
use crate::types::number_to_string;
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Conservative RFC 5322-like address pattern: a dotted or quoted local part,
/// and either a bracketed IPv4 literal or a domain with an alphabetic TLD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("valid regex")
});

/// ISO calendar date: `yyyy-mm-dd`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ISO_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Check e-mail address syntax. Empty input is invalid.
///
/// # Examples
/// ```
/// use minelev_engine::format::is_valid_email;
///
/// assert!(is_valid_email("a@b.no"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Strip a mobile number down to its national digits.
///
/// Trims, removes spaces, drops a leading `+47` or `0047`, then removes every
/// remaining non-digit character.
pub fn normalize_mobile(mobile: &str) -> String {
    let compact: String = mobile.trim().chars().filter(|c| *c != ' ').collect();
    let national = compact
        .strip_prefix("+47")
        .or_else(|| compact.strip_prefix("0047"))
        .unwrap_or(&compact);
    national.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check a Norwegian mobile number: exactly eight digits after normalization.
///
/// # Examples
/// ```
/// use minelev_engine::format::is_valid_mobile;
///
/// assert!(is_valid_mobile("+47 12 34 56 78"));
/// assert!(is_valid_mobile("0047 12345678"));
/// assert!(!is_valid_mobile("1234567"));
/// ```
pub fn is_valid_mobile(mobile: &str) -> bool {
    normalize_mobile(mobile).len() == MOBILE_NUMBER_DIGITS
}

/// Check a Norwegian organisation number: exactly nine ASCII digits.
pub fn is_valid_organization_number(number: &str) -> bool {
    number.len() == ORGANIZATION_NUMBER_LENGTH && number.chars().all(|c| c.is_ascii_digit())
}

/// Parse a strict `yyyy-mm-dd` date.
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    if !ISO_DATE_PATTERN.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Render a date in the dotted local form `dd.mm.yyyy`.
pub fn to_local_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Convert `yyyy-mm-dd` to `dd.mm.yyyy`, or `None` if the input is not a valid
/// ISO date.
pub fn iso_to_local_date(date: &str) -> Option<String> {
    parse_iso_date(date).map(to_local_date)
}

/// Canonical string form of a numeric-looking value.
///
/// Numbers are stringified, strings are accepted when their trimmed content
/// parses as a number and are returned trimmed. Everything else is `None`.
pub fn numeric_string(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(number_to_string(n)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|_| trimmed.to_string())
        }
        _ => None,
    }
}

/// String form of a scalar, as used when phone numbers arrive as numbers.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
