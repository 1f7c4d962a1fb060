use super::*;
use chrono::TimeZone;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap()
}

#[test]
fn test_datetime_passes_through() {
    let value = Utc.with_ymd_and_hms(2020, 2, 29, 6, 30, 0).unwrap();
    assert_eq!(resolve_instant(value).unwrap(), value);
}

#[test]
fn test_fixed_offset_is_converted_to_utc() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let value = offset.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let resolved = resolve_instant(value).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_timestamp_is_read_as_epoch_seconds() {
    let resolved = resolve_instant(0_i64).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());

    let resolved = resolve_instant(1_700_000_000_i64).unwrap();
    assert_eq!(resolved.format(TIMESTAMP_FORMAT).to_string(), "2023-11-14 22:13:20");
}

#[test]
fn test_timestamp_out_of_range() {
    let result = resolve_instant(i64::MAX);
    assert!(matches!(result, Err(AgoError::Parse { .. })));
}

#[test]
fn test_text_formats() {
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 10, 15, 0).unwrap();
    for text in [
        "2024-05-01 10:15:00",
        "2024-05-01T10:15:00",
        "2024-05-01 10:15",
        "2024-05-01T12:15:00+02:00",
        "2024-05-01T10:15:00Z",
        "  2024-05-01 10:15:00  ",
    ] {
        assert_eq!(resolve_instant(text).unwrap(), expected, "input: {text}");
    }
}

#[test]
fn test_date_only_is_midnight_utc() {
    let resolved = resolve_instant("2024-05-01".to_string()).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_now_uses_reference() {
    assert_eq!(resolve_instant_at("NOW", fixed_now()).unwrap(), fixed_now());
}

#[test]
fn test_relative_days_and_hours() {
    let resolved = resolve_instant_at("-3 days", fixed_now()).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 28, 12, 0, 0).unwrap());

    let resolved = resolve_instant_at("+2 hours 30 minutes", fixed_now()).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 31, 14, 30, 0).unwrap());
}

#[test]
fn test_relative_months_clamp_to_month_end() {
    let resolved = resolve_instant_at("+1 month", fixed_now()).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
}

#[test]
fn test_relative_terms_are_signed_separately() {
    let resolved = resolve_instant_at("-1 year +2 weeks", fixed_now()).unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2023, 2, 14, 12, 0, 0).unwrap());
}

#[test]
fn test_relative_unknown_unit() {
    let result = resolve_instant_at("-3 fortnights", fixed_now());
    assert!(matches!(result, Err(AgoError::Parse { ref message, .. }) if message.contains("fortnights")));
}

#[test]
fn test_relative_overflow() {
    let result = resolve_instant_at("+9999999999 years", fixed_now());
    assert!(matches!(result, Err(AgoError::Parse { .. })));
}

#[test]
fn test_unparseable_text_keeps_source() {
    use std::error::Error;

    let err = resolve_instant("last tuesday-ish").unwrap_err();
    assert!(matches!(err, AgoError::Parse { .. }));
    assert!(err.source().is_some());
}
