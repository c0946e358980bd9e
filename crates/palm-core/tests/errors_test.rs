use palm_core::errors::*;

#[test]
fn unknown_branch_carries_label() {
    let err = RingError::UnknownBranch {
        label: "甲".into(),
    };
    assert!(err.to_string().contains("甲"));
    assert_eq!(err.error_code(), "UNKNOWN_BRANCH");
}

#[test]
fn calendar_error_carries_date() {
    let err = CalendarError::InvalidDate {
        year: 2024,
        month: 2,
        day: 30,
    };
    assert!(err.to_string().contains("2024-2-30"));
}

#[test]
fn request_error_codes_are_specific() {
    let malformed = RequestError::MalformedDate {
        input: "1990/01/01".into(),
    };
    assert_eq!(malformed.error_code(), "MALFORMED_DATE");

    let scope = RequestError::InvalidScope {
        value: "week".into(),
    };
    assert_eq!(scope.error_code(), "INVALID_REQUEST");
}

#[test]
fn wire_string_prefixes_code() {
    let err = EngineError::AgeOutOfRange { age: 0 };
    let wire = err.wire_string();
    assert!(wire.starts_with("[AGE_OUT_OF_RANGE] "));
    assert!(wire.contains("age 0"));
}

#[test]
fn age_out_of_range_reports_ages_beyond_i32() {
    let age = i64::from(i32::MIN) - 1990;
    let err = EngineError::AgeOutOfRange { age };
    assert!(err.to_string().contains(&age.to_string()));
}

// --- From impls ---

#[test]
fn request_error_converts_to_engine_error() {
    let err: EngineError = RequestError::MalformedDate {
        input: "bad".into(),
    }
    .into();
    assert!(matches!(err, EngineError::Request(_)));
    assert_eq!(err.error_code(), "MALFORMED_DATE");
}

#[test]
fn calendar_error_code() {
    let err = CalendarError::OutOfRange {
        year: 1800,
        month: 1,
        day: 1,
    };
    assert_eq!(err.error_code(), "CALENDAR_ERROR");
}

#[test]
fn config_error_converts_to_engine_error() {
    let err: EngineError = ConfigError::ValidationFailed {
        field: "engine.default_scope".into(),
        message: "bad".into(),
    }
    .into();
    assert!(err.to_string().contains("engine.default_scope"));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
