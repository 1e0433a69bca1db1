//! Domain validators for the spacecraft and docking forms.
//!
//! Each field is checked independently: a missing key is reported as such
//! and skips the rest of that field's chain. The result only holds fields
//! that failed, so an empty [`ValidationErrors`] means the form is valid.

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::{debug, instrument};

use crate::domain::rules::{self, interpolate_field_name};
use crate::domain::validation::{ValidationErrors, Validator};
use crate::domain::value_objects::{FieldDescriptor, FieldValue, FormData};

/// Latest calendar year (UTC) a docking may be booked in.
pub const MAX_FUTURE_YEAR: i32 = 2050;
pub const MIN_BAY_ID: f64 = 1.0;
pub const MAX_BAY_ID: f64 = 1000.0;
pub const ENTERPRISE_ID: &str = "3n73rpr153";
pub const ENTERPRISE_FORBIDDEN_BAY: f64 = 1701.0;

pub const SPACECRAFT_NAME: FieldDescriptor = FieldDescriptor::new("name", "Spacecraft name");
pub const SPACECRAFT_TYPE: FieldDescriptor = FieldDescriptor::new("type", "Spacecraft type");
pub const CAPTAIN_NAME: FieldDescriptor = FieldDescriptor::new("captain", "Captain name");

pub const SPACECRAFT_ID: FieldDescriptor = FieldDescriptor::new("spacecraftId", "Spacecraft ID");
pub const DOCKING_TIME: FieldDescriptor = FieldDescriptor::new("dockingTime", "Docking time");
pub const BAY_ID: FieldDescriptor = FieldDescriptor::new("bayId", "Bay ID");

const HORIZON_MESSAGE: &str = "Docking time cannot be more than 30 years in the future";
const WHOLE_SECOND_MESSAGE: &str = "Docking time must be at a whole second boundary";
const ENTERPRISE_MESSAGE: &str = "Enterprise cannot dock in bay 1701 due to historical reasons";

/// required → is_string → not_empty → valid_chars, all named `display_name`.
pub fn create_string_field_validator(display_name: &str) -> Validator<FieldValue> {
    let name = Some(display_name);
    let not_a_string = interpolate_field_name(rules::IS_STRING, name);

    Validator::<FieldValue>::new()
        .add_rule(rules::required(name))
        .add_rule(rules::is_string(name))
        .add_rule(rules::on_text(rules::not_empty(name), not_a_string.clone()))
        .add_rule(rules::on_text(rules::valid_chars(name), not_a_string))
}

/// Validate a spacecraft form: `name`, `type` and `captain`.
#[instrument(level = "debug", skip_all, fields(fields = data.len()))]
pub fn validate_spacecraft(data: &FormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in [SPACECRAFT_NAME, SPACECRAFT_TYPE, CAPTAIN_NAME] {
        check_field(
            data,
            field,
            &create_string_field_validator(field.display_name),
            &mut errors,
        );
    }

    debug!(failed = errors.len(), "spacecraft form checked");
    errors
}

/// Validate a docking form against the current time.
pub fn validate_docking(data: &FormData) -> ValidationErrors {
    validate_docking_at(data, Utc::now())
}

/// Validate a docking form: `spacecraftId`, `dockingTime` and `bayId`.
///
/// `now` is the instant the docking time must come after.
#[instrument(level = "debug", skip_all, fields(fields = data.len(), now = %now))]
pub fn validate_docking_at(data: &FormData, now: DateTime<Utc>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_field(
        data,
        SPACECRAFT_ID,
        &create_string_field_validator(SPACECRAFT_ID.display_name),
        &mut errors,
    );
    check_field(data, DOCKING_TIME, &docking_time_validator(now), &mut errors);
    check_field(data, BAY_ID, &bay_id_validator(), &mut errors);

    if is_enterprise_in_forbidden_bay(data) {
        debug!("enterprise override applied to bay");
        errors.insert(BAY_ID.key, ENTERPRISE_MESSAGE);
    }

    debug!(failed = errors.len(), "docking form checked");
    errors
}

/// Missing-key check, then the field's validator.
fn check_field(
    data: &FormData,
    field: FieldDescriptor,
    validator: &Validator<FieldValue>,
    errors: &mut ValidationErrors,
) {
    let Some(value) = data.get(field.key) else {
        debug!(field = field.key, "key missing");
        errors.insert(field.key, field.missing_message());
        return;
    };

    if let Some(message) = validator.validate(value) {
        debug!(field = field.key, value_type = value.type_name(), %message, "field failed");
        errors.insert(field.key, message);
    }
}

/// Future date, then the year cutoff, then the whole-second check.
///
/// Anything that is not a string is reported as an invalid date.
fn docking_time_validator(now: DateTime<Utc>) -> Validator<FieldValue> {
    let name = Some(DOCKING_TIME.display_name);
    let invalid = interpolate_field_name(rules::VALID_DATE, name);

    let within_horizon = |value: &str| match rules::parse_timestamp(value) {
        Some(at) if at.year() > MAX_FUTURE_YEAR => Some(HORIZON_MESSAGE.to_owned()),
        _ => None,
    };
    let whole_second = |value: &str| match rules::parse_timestamp(value) {
        Some(at) if at.nanosecond() != 0 => Some(WHOLE_SECOND_MESSAGE.to_owned()),
        _ => None,
    };

    Validator::<FieldValue>::new()
        .add_rule(rules::on_text(rules::future_date_at(now, name), invalid.clone()))
        .add_rule(rules::on_text(within_horizon, invalid.clone()))
        .add_rule(rules::on_text(whole_second, invalid))
}

fn bay_id_validator() -> Validator<FieldValue> {
    let name = Some(BAY_ID.display_name);
    let not_a_number = interpolate_field_name(rules::IS_NUMBER, name);

    Validator::<FieldValue>::new()
        .add_rule(rules::is_number(name))
        .add_rule(rules::on_number(rules::is_integer(name), not_a_number.clone()))
        .add_rule(rules::on_number(
            rules::range(MIN_BAY_ID, MAX_BAY_ID, name),
            not_a_number,
        ))
}

fn is_enterprise_in_forbidden_bay(data: &FormData) -> bool {
    data.get(SPACECRAFT_ID.key).and_then(FieldValue::as_str) == Some(ENTERPRISE_ID)
        && data.get(BAY_ID.key).and_then(FieldValue::as_f64) == Some(ENTERPRISE_FORBIDDEN_BAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    fn valid_spacecraft() -> FormData {
        FormData::new()
            .with("name", "Voyager")
            .with("type", "Explorer")
            .with("captain", "Janeway")
    }

    fn valid_docking() -> FormData {
        FormData::new()
            .with("spacecraftId", "voyager1")
            .with("dockingTime", (now() + Duration::days(1)).to_rfc3339())
            .with("bayId", 42)
    }

    // ── spacecraft ────────────────────────────────────────────────────────

    #[test]
    fn valid_spacecraft_has_no_errors() {
        assert!(validate_spacecraft(&valid_spacecraft()).is_valid());
    }

    #[test]
    fn string_validator_reports_in_chain_order() {
        let validator = create_string_field_validator("Captain name");
        assert_eq!(validator.len(), 4);
        assert_eq!(
            validator.validate(&FieldValue::Undefined).as_deref(),
            Some("Captain name cannot be null or undefined")
        );
        assert_eq!(
            validator.validate(&FieldValue::Bool(true)).as_deref(),
            Some("Captain name must be a string")
        );
        assert_eq!(
            validator.validate(&FieldValue::from("")).as_deref(),
            Some("Captain name cannot be empty")
        );
        assert_eq!(
            validator.validate(&FieldValue::from("K!rk")).as_deref(),
            Some("Captain name contains invalid characters")
        );
    }

    #[test]
    fn null_spacecraft_field_is_required_error() {
        let form = valid_spacecraft().with("type", FieldValue::Null);
        let errors = validate_spacecraft(&form);
        assert_eq!(errors.get("type"), Some("Spacecraft type cannot be null or undefined"));
        assert_eq!(errors.len(), 1);
    }

    // ── docking ───────────────────────────────────────────────────────────

    #[test]
    fn valid_docking_has_no_errors() {
        assert!(validate_docking_at(&valid_docking(), now()).is_valid());
    }

    #[test]
    fn unparsable_docking_time() {
        let form = valid_docking().with("dockingTime", "next tuesday");
        assert_eq!(
            validate_docking_at(&form, now()).get("dockingTime"),
            Some("Docking time must be a valid date")
        );
    }

    #[test]
    fn non_string_docking_time_is_invalid_date() {
        for value in [FieldValue::Null, FieldValue::from(1_700_000_000), FieldValue::Undefined] {
            let form = valid_docking().with("dockingTime", value);
            assert_eq!(
                validate_docking_at(&form, now()).get("dockingTime"),
                Some("Docking time must be a valid date")
            );
        }
    }

    #[test]
    fn docking_time_equal_to_now_is_not_future() {
        let form = valid_docking().with("dockingTime", now().to_rfc3339());
        assert_eq!(
            validate_docking_at(&form, now()).get("dockingTime"),
            Some("Docking time must be in the future")
        );
    }

    #[test]
    fn year_cutoff_is_inclusive() {
        let last_second = "2050-12-31T23:59:59Z";
        let first_second = "2051-01-01T00:00:00Z";

        let ok = valid_docking().with("dockingTime", last_second);
        assert!(validate_docking_at(&ok, now()).is_valid());

        let late = valid_docking().with("dockingTime", first_second);
        assert_eq!(
            validate_docking_at(&late, now()).get("dockingTime"),
            Some("Docking time cannot be more than 30 years in the future")
        );
    }

    #[test]
    fn leap_second_is_invalid_date_not_fractional() {
        let form = valid_docking().with("dockingTime", "2030-06-30T23:59:60Z");
        assert_eq!(
            validate_docking_at(&form, now()).get("dockingTime"),
            Some("Docking time must be a valid date")
        );
    }

    #[test]
    fn year_cutoff_wins_over_whole_second() {
        let form = valid_docking().with("dockingTime", "2060-01-01T00:00:00.250Z");
        assert_eq!(
            validate_docking_at(&form, now()).get("dockingTime"),
            Some("Docking time cannot be more than 30 years in the future")
        );
    }

    #[test]
    fn enterprise_in_forbidden_bay_overrides_range_message() {
        let form = valid_docking()
            .with("spacecraftId", ENTERPRISE_ID)
            .with("bayId", 1701);
        assert_eq!(
            validate_docking_at(&form, now()).get("bayId"),
            Some("Enterprise cannot dock in bay 1701 due to historical reasons")
        );
    }

    #[test]
    fn enterprise_in_other_bay_is_fine() {
        let form = valid_docking().with("spacecraftId", ENTERPRISE_ID);
        assert!(validate_docking_at(&form, now()).is_valid());
    }

    #[test]
    fn bay_1701_without_enterprise_gets_range_message() {
        let form = valid_docking().with("bayId", 1701);
        assert_eq!(
            validate_docking_at(&form, now()).get("bayId"),
            Some("Bay ID must be between 1 and 1000")
        );
    }

    #[test]
    fn undefined_bay_is_not_a_number() {
        let form = valid_docking().with("bayId", FieldValue::Undefined);
        assert_eq!(
            validate_docking_at(&form, now()).get("bayId"),
            Some("Bay ID must be a number")
        );
    }
}
