//! Integration tests for dockval-core.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use dockval_core::{
    application::{FixedClock, ValidationService},
    domain::{FieldValue, FormData, FormKind},
    prelude::*,
};
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn spacecraft() -> FormData {
    FormData::new()
        .with("name", "USS Defiant")
        .with("type", "Escort")
        .with("captain", "Benjamin Sisko")
}

fn docking() -> FormData {
    FormData::new()
        .with("spacecraftId", "nx74205")
        .with("dockingTime", iso(now() + Duration::days(1)))
        .with("bayId", 42)
}

// ── spacecraft ──────────────────────────────────────────────────────────────

#[test]
fn test_valid_spacecraft_forms() {
    let forms = [
        spacecraft(),
        FormData::new()
            .with("name", "Voyager 2")
            .with("type", "Intrepid class")
            .with("captain", "  Kathryn Janeway  "),
        FormData::new()
            .with("name", "A")
            .with("type", "B")
            .with("captain", "C\tD"),
    ];

    for form in forms {
        assert!(validate_spacecraft(&form).is_valid(), "{form:?}");
    }
}

#[test]
fn test_empty_spacecraft_reports_every_missing_key() {
    let errors = validate_spacecraft(&FormData::new());

    let expected: ValidationErrors = [
        ("name", "Spacecraft name key is missing"),
        ("type", "Spacecraft type key is missing"),
        ("captain", "Captain name key is missing"),
    ]
    .into_iter()
    .collect();
    assert_eq!(errors, expected);
}

#[test]
fn test_one_invalid_spacecraft_field_at_a_time() {
    let cases: [(&str, FieldValue, &str); 9] = [
        ("name", " ".into(), "Spacecraft name cannot be empty"),
        ("name", 123.into(), "Spacecraft name must be a string"),
        ("name", "Defiant!".into(), "Spacecraft name contains invalid characters"),
        ("type", "".into(), "Spacecraft type cannot be empty"),
        ("type", FieldValue::Null, "Spacecraft type cannot be null or undefined"),
        ("type", true.into(), "Spacecraft type must be a string"),
        ("captain", "Kirk@Enterprise".into(), "Captain name contains invalid characters"),
        ("captain", FieldValue::Undefined, "Captain name cannot be null or undefined"),
        ("captain", json!(["Kirk"]).into(), "Captain name must be a string"),
    ];

    for (field, value, message) in cases {
        let errors = validate_spacecraft(&spacecraft().with(field, value));
        assert_eq!(errors.len(), 1, "{field}: {errors}");
        assert_eq!(errors.get(field), Some(message));
    }
}

// ── docking ─────────────────────────────────────────────────────────────────

#[test]
fn test_valid_docking_forms() {
    let forms = [
        docking(),
        docking().with("bayId", 1),
        docking().with("bayId", 1000),
        docking().with("dockingTime", "2050-06-01T08:00:00Z"),
        docking().with("spacecraftId", "3n73rpr153"),
    ];

    for form in forms {
        assert!(validate_docking_at(&form, now()).is_valid(), "{form:?}");
    }
}

#[test]
fn test_empty_docking_reports_every_missing_key() {
    let errors = validate_docking_at(&FormData::new(), now());

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("spacecraftId"), Some("Spacecraft ID key is missing"));
    assert_eq!(errors.get("dockingTime"), Some("Docking time key is missing"));
    assert_eq!(errors.get("bayId"), Some("Bay ID key is missing"));
}

#[test]
fn test_invalid_spacecraft_id() {
    let cases: [(FieldValue, &str); 4] = [
        (FieldValue::Null, "Spacecraft ID cannot be null or undefined"),
        (123.into(), "Spacecraft ID must be a string"),
        (" ".into(), "Spacecraft ID cannot be empty"),
        ("nx-74205".into(), "Spacecraft ID contains invalid characters"),
    ];

    for (value, message) in cases {
        let errors = validate_docking_at(&docking().with("spacecraftId", value), now());
        assert_eq!(errors.len(), 1, "{errors}");
        assert_eq!(errors.get("spacecraftId"), Some(message));
    }
}

#[test]
fn test_docking_time_in_the_past() {
    let form = docking().with("dockingTime", iso(now() - Duration::days(1)));
    assert_eq!(
        validate_docking_at(&form, now()).get("dockingTime"),
        Some("Docking time must be in the future")
    );
}

#[test]
fn test_docking_time_past_the_horizon() {
    let form = docking().with("dockingTime", iso(now() + Duration::days(365 * 31)));
    assert_eq!(
        validate_docking_at(&form, now()).get("dockingTime"),
        Some("Docking time cannot be more than 30 years in the future")
    );
}

#[test]
fn test_docking_time_off_a_whole_second() {
    let at = now() + Duration::days(1) + Duration::milliseconds(100);
    let form = docking().with("dockingTime", iso(at));
    assert_eq!(
        validate_docking_at(&form, now()).get("dockingTime"),
        Some("Docking time must be at a whole second boundary")
    );
}

#[test]
fn test_invalid_bay_id() {
    let cases: [(FieldValue, &str); 7] = [
        (FieldValue::Undefined, "Bay ID must be a number"),
        (FieldValue::Null, "Bay ID must be a number"),
        ("42".into(), "Bay ID must be a number"),
        (0.into(), "Bay ID must be between 1 and 1000"),
        (1001.into(), "Bay ID must be between 1 and 1000"),
        ((-3).into(), "Bay ID must be between 1 and 1000"),
        (42.5.into(), "Bay ID must be an integer"),
    ];

    for (value, message) in cases {
        let errors = validate_docking_at(&docking().with("bayId", value), now());
        assert_eq!(errors.len(), 1, "{errors}");
        assert_eq!(errors.get("bayId"), Some(message));
    }
}

#[test]
fn test_enterprise_cannot_use_bay_1701() {
    let form = docking()
        .with("spacecraftId", "3n73rpr153")
        .with("bayId", 1701);

    let errors = validate_docking_at(&form, now());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("bayId"),
        Some("Enterprise cannot dock in bay 1701 due to historical reasons")
    );
}

#[test]
fn test_fields_fail_independently() {
    let form = FormData::new()
        .with("spacecraftId", "")
        .with("dockingTime", "2001-01-01T00:00:00Z")
        .with("bayId", "seven");

    let errors = validate_docking_at(&form, now());
    assert_eq!(errors.get("spacecraftId"), Some("Spacecraft ID cannot be empty"));
    assert_eq!(errors.get("dockingTime"), Some("Docking time must be in the future"));
    assert_eq!(errors.get("bayId"), Some("Bay ID must be a number"));
}

#[test]
fn test_validators_are_idempotent() {
    let form = docking().with("bayId", 0).with("spacecraftId", "a?b");
    assert_eq!(
        validate_docking_at(&form, now()),
        validate_docking_at(&form, now())
    );

    let form = spacecraft().with("type", FieldValue::Null);
    assert_eq!(validate_spacecraft(&form), validate_spacecraft(&form));
}

// ── service ─────────────────────────────────────────────────────────────────

#[test]
fn test_service_validates_json_text() {
    let service = ValidationService::new(Box::new(FixedClock::new(now())));
    let body = json!({
        "spacecraftId": "3n73rpr153",
        "dockingTime": "2027-01-01T10:00:00Z",
        "bayId": 1701
    })
    .to_string();

    let report = service.validate_json(FormKind::Docking, &body).unwrap();
    assert!(!report.is_valid());
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "kind": "docking",
            "valid": false,
            "errors": {
                "bayId": "Enterprise cannot dock in bay 1701 due to historical reasons"
            }
        })
    );
}

#[test]
fn test_service_rejects_unparseable_bodies() {
    let service = ValidationService::new(Box::new(FixedClock::new(now())));

    let err = service.validate_json(FormKind::Spacecraft, "{ name:").unwrap_err();
    assert!(matches!(err, DockvalError::Application(_)));

    let err = service.validate_json(FormKind::Spacecraft, "[]").unwrap_err();
    assert!(matches!(err, DockvalError::Domain(_)));
    assert!(!err.suggestions().is_empty());
}

#[test]
fn test_entities_from_valid_forms() {
    let ship = Spacecraft::from_form(&spacecraft()).unwrap();
    assert_eq!(ship.captain, "Benjamin Sisko");

    let request = DockingRequest::from_form_at(&docking(), now()).unwrap();
    assert_eq!(request.bay_id, 42);
    assert_eq!(request.status, DockingStatus::Scheduled);
}
