use std::sync::OnceLock;

use regex::Regex;

use crate::models::SessionType;

/// Hourly rate in NGN before the session-type multiplier.
pub const BASE_RATE: f64 = 15000.0;

/// `BASE_RATE * hours * multiplier`. Unknown session types and non-numeric
/// durations produce NaN rather than an error.
pub fn calculate_cost(session_type: &str, duration: &str) -> f64 {
    let multiplier = SessionType::parse(session_type)
        .map(|t| t.multiplier())
        .unwrap_or(f64::NAN);
    BASE_RATE * (parse_minutes(duration) / 60.0) * multiplier
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").expect("decimal pattern")
    })
}

/// Numeric reading of the duration field with browser number-conversion
/// rules: surrounding whitespace ignored, blank is 0, `Infinity` and
/// `0x`/`0o`/`0b` literals accepted, anything else non-numeric is NaN.
pub fn parse_minutes(duration: &str) -> f64 {
    let s = duration.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(s) {
        return value;
    }

    if decimal_re().is_match(s) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

// Unsigned 0x/0o/0b literals. `None` when `s` has no radix prefix.
fn radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}
