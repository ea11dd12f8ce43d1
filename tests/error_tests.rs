use hijri_cal::{Calendar, DateError};

#[test]
fn test_invalid_components_display() {
    let err = DateError::InvalidDateComponents {
        year: 1445,
        month: 2,
        day: 30,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("1445"));
    assert!(msg.contains("month 2"));
    assert!(msg.contains("day 30"));
}

#[test]
fn test_unsupported_locale_display() {
    let err = DateError::UnsupportedLocale("fr".to_string());
    let msg = format!("{}", err);
    assert!(msg.contains("'fr'"));
}

#[test]
fn test_out_of_range_display() {
    let err = DateError::ConversionOutOfRange {
        calendar: Calendar::Gregorian,
        year: 622,
        month: 7,
        day: 18,
    };
    assert_eq!(
        err.to_string(),
        "gregorian date 0622-07-18 is outside the supported range"
    );
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DateError::UnsupportedLocale("x".into()));
    assert!(!err.to_string().is_empty());
}
