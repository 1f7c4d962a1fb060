use chrono::{FixedOffset, TimeZone, Utc};
use libago::translator::{ChoiceTranslator, builtin_catalog};
use libago::{AgoBuilder, DiffFormatter, TimeUnit, TranslatorKind};

#[test]
fn test_ago_builder_new() {
    let _builder = AgoBuilder::new().locale("fr").strict(true);
    // Fields are private; building is covered by the unit tests.
}

#[test]
fn test_formatter_over_builtin_catalog() {
    let catalog = builtin_catalog(TranslatorKind::Choice, "en")
        .unwrap()
        .unwrap();
    let formatter = DiffFormatter::new(ChoiceTranslator::new(catalog));

    let from = Utc.with_ymd_and_hms(2021, 6, 15, 8, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2021, 6, 15, 8, 0, 1).unwrap();

    assert_eq!(formatter.format_diff(&from, &to, &[]).unwrap(), "1 second ago");
    assert_eq!(formatter.format_diff(&to, &from, &[]).unwrap(), "in 1 second");
}

#[test]
fn test_formatter_accepts_fixed_offsets() {
    let catalog = builtin_catalog(TranslatorKind::Plain, "en")
        .unwrap()
        .unwrap();
    let formatter = DiffFormatter::new(TranslatorKind::Plain.build(catalog, true));

    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let from = offset.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    let to = offset.with_ymd_and_hms(2024, 3, 2, 6, 0, 0).unwrap();

    let message = formatter
        .format_diff(&from, &to, &[TimeUnit::Month, TimeUnit::Day, TimeUnit::Hour])
        .unwrap();
    assert_eq!(message, "1 month ago 1 day 6 hours");
}
