//! Rule factories.
//!
//! Each factory takes an optional display name and returns a rule whose
//! message has the name substituted for the `Field` token. Rules that need a
//! narrowed value (`not_empty`, `valid_chars`, `is_integer`, `range`,
//! `future_date`) are typed on `str` or `f64`; [`on_text`] and [`on_number`]
//! lift them onto a raw [`FieldValue`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::domain::validation::ValidationRule;
use crate::domain::value_objects::FieldValue;

/// Placeholder replaced by the display name.
pub const FIELD_TOKEN: &str = "Field";

pub const REQUIRED: &str = "Field cannot be null or undefined";
pub const DEFINED: &str = "Field cannot be undefined";
pub const NOT_NULL: &str = "Field cannot be null";
pub const IS_STRING: &str = "Field must be a string";
pub const NOT_EMPTY: &str = "Field cannot be empty";
pub const VALID_CHARS: &str = "Field contains invalid characters";
pub const IS_NUMBER: &str = "Field must be a number";
pub const IS_INTEGER: &str = "Field must be an integer";
pub const VALID_DATE: &str = "Field must be a valid date";
pub const FUTURE_DATE: &str = "Field must be in the future";

/// Substitute `field_name` for the first `Field` token in `template`.
///
/// A missing or empty name leaves the template untouched.
pub fn interpolate_field_name(template: &str, field_name: Option<&str>) -> String {
    match field_name {
        Some(name) if !name.is_empty() => template.replacen(FIELD_TOKEN, name, 1),
        _ => template.to_owned(),
    }
}

// ── FieldValue rules ─────────────────────────────────────────────────────────

/// Fails on `null` and on undefined: [`not_null`] or [`defined`] failing.
pub fn required(field_name: Option<&str>) -> impl ValidationRule<FieldValue> + use<> {
    let message = interpolate_field_name(REQUIRED, field_name);
    let null = not_null(field_name);
    let undefined = defined(field_name);
    move |value: &FieldValue| {
        (null.validate(value).is_some() || undefined.validate(value).is_some())
            .then(|| message.clone())
    }
}

/// Fails only on undefined.
pub fn defined(field_name: Option<&str>) -> impl ValidationRule<FieldValue> + use<> {
    let message = interpolate_field_name(DEFINED, field_name);
    move |value: &FieldValue| matches!(value, FieldValue::Undefined).then(|| message.clone())
}

/// Fails only on `null`.
pub fn not_null(field_name: Option<&str>) -> impl ValidationRule<FieldValue> + use<> {
    let message = interpolate_field_name(NOT_NULL, field_name);
    move |value: &FieldValue| matches!(value, FieldValue::Null).then(|| message.clone())
}

pub fn is_string(field_name: Option<&str>) -> impl ValidationRule<FieldValue> + use<> {
    let message = interpolate_field_name(IS_STRING, field_name);
    move |value: &FieldValue| value.as_str().is_none().then(|| message.clone())
}

pub fn is_number(field_name: Option<&str>) -> impl ValidationRule<FieldValue> + use<> {
    let message = interpolate_field_name(IS_NUMBER, field_name);
    move |value: &FieldValue| value.as_f64().is_none().then(|| message.clone())
}

// ── str rules ────────────────────────────────────────────────────────────────

/// Fails when the string is blank after trimming.
pub fn not_empty(field_name: Option<&str>) -> impl ValidationRule<str> + use<> {
    let message = interpolate_field_name(NOT_EMPTY, field_name);
    move |value: &str| value.trim().is_empty().then(|| message.clone())
}

/// Fails on anything other than ASCII letters, ASCII digits and
/// [`is_form_whitespace`] characters.
pub fn valid_chars(field_name: Option<&str>) -> impl ValidationRule<str> + use<> {
    let message = interpolate_field_name(VALID_CHARS, field_name);
    move |value: &str| {
        value
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || is_form_whitespace(c)))
            .then(|| message.clone())
    }
}

/// The whitespace class forms have always accepted: ASCII whitespace
/// including vertical tab, the Unicode space separators, the line and
/// paragraph separators, and the byte order mark.
///
/// Unlike [`char::is_whitespace`] this excludes U+0085 (NEL) and includes
/// U+FEFF.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Fails when the string is not a date, or is not strictly after the
/// current time at evaluation.
pub fn future_date(field_name: Option<&str>) -> impl ValidationRule<str> + use<> {
    let invalid = interpolate_field_name(VALID_DATE, field_name);
    let past = interpolate_field_name(FUTURE_DATE, field_name);
    move |value: &str| check_future(value, Utc::now(), &invalid, &past)
}

/// [`future_date`] measured against a fixed instant.
pub fn future_date_at(now: DateTime<Utc>, field_name: Option<&str>) -> impl ValidationRule<str> + use<> {
    let invalid = interpolate_field_name(VALID_DATE, field_name);
    let past = interpolate_field_name(FUTURE_DATE, field_name);
    move |value: &str| check_future(value, now, &invalid, &past)
}

fn check_future(value: &str, now: DateTime<Utc>, invalid: &str, past: &str) -> Option<String> {
    match parse_timestamp(value) {
        None => Some(invalid.to_owned()),
        Some(at) if at <= now => Some(past.to_owned()),
        Some(_) => None,
    }
}

// ── f64 rules ────────────────────────────────────────────────────────────────

pub fn is_integer(field_name: Option<&str>) -> impl ValidationRule<f64> + use<> {
    let message = interpolate_field_name(IS_INTEGER, field_name);
    move |value: &f64| (!value.is_finite() || value.fract() != 0.0).then(|| message.clone())
}

/// Inclusive bounds.
pub fn range(min: f64, max: f64, field_name: Option<&str>) -> impl ValidationRule<f64> + use<> {
    let message = interpolate_field_name(&format!("Field must be between {min} and {max}"), field_name);
    move |value: &f64| (*value < min || *value > max).then(|| message.clone())
}

// ── Adapters ─────────────────────────────────────────────────────────────────

/// Run a `str` rule on text values; any other value fails with `otherwise`.
pub fn on_text<R>(rule: R, otherwise: impl Into<String>) -> impl ValidationRule<FieldValue>
where
    R: ValidationRule<str>,
{
    let otherwise = otherwise.into();
    move |value: &FieldValue| match value.as_str() {
        Some(text) => rule.validate(text),
        None => Some(otherwise.clone()),
    }
}

/// Run an `f64` rule on numeric values; any other value fails with `otherwise`.
pub fn on_number<R>(rule: R, otherwise: impl Into<String>) -> impl ValidationRule<FieldValue>
where
    R: ValidationRule<f64>,
{
    let otherwise = otherwise.into();
    move |value: &FieldValue| match value.as_f64() {
        Some(number) => rule.validate(&number),
        None => Some(otherwise.clone()),
    }
}

// ── Dates ────────────────────────────────────────────────────────────────────

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with an offset or `Z`, a date-time without offset (read
/// as UTC), or a bare `YYYY-MM-DD` (midnight UTC). Leap seconds (`:60`) are
/// not dates.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    parse_any_timestamp(value.trim()).filter(|at| at.nanosecond() < 1_000_000_000)
}

fn parse_any_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
