use std::sync::OnceLock;

use regex::Regex;

use crate::errors::BookingError;
use crate::models::BookingForm;

pub const MIN_AGE: u64 = 5;
pub const ADULT_AGE: u64 = 18;

fn age_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("age pattern"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
    })
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9]{11,14}$").expect("phone pattern"))
}

/// Drops everything that is not an ASCII digit.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Leading-digit integer parse. `None` when the input does not start with a
/// digit or the value does not fit in a `u64`.
pub fn parse_leading_int(input: &str) -> Option<u64> {
    let mut digits = input
        .trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .peekable();
    digits.peek()?;
    digits.try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(u64::from(d)))
}

/// Whether the "(Minor)" note applies. No number means no note.
pub fn is_minor(age: Option<u64>) -> bool {
    matches!(age, Some(n) if n < ADULT_AGE)
}

/// First empty field, in form order. Whitespace counts as filled.
pub fn check_complete(form: &BookingForm) -> Result<(), BookingError> {
    match form.fields().into_iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(BookingError::MissingField { field }),
        None => Ok(()),
    }
}

/// Numeric reading of a valid age. The pattern guarantees digits, so `None`
/// means the value overflowed and is far above the minimum.
pub fn validate_age(age: &str) -> Result<Option<u64>, BookingError> {
    if !age_re().is_match(age) {
        return Err(BookingError::InvalidAge);
    }
    match parse_leading_int(age) {
        Some(n) if n < MIN_AGE => Err(BookingError::InvalidAge),
        years => Ok(years),
    }
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    if email_re().is_match(email) {
        Ok(())
    } else {
        Err(BookingError::InvalidEmail)
    }
}

pub fn validate_phone(phone: &str) -> Result<(), BookingError> {
    if phone_re().is_match(phone) {
        Ok(())
    } else {
        Err(BookingError::InvalidPhone)
    }
}
