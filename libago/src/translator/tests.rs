use super::*;
use crate::error::AgoError;

#[test]
fn test_params_count_binds_placeholder() {
    let params = Params::count(7);
    assert_eq!(params.get(COUNT_PARAM), Some("7"));
    assert!(!params.is_empty());
}

#[test]
fn test_params_with_replaces_existing_value() {
    let params = Params::count(1).with("%count%", 2).with("%who%", "Ana");
    let entries: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(entries, vec![("%count%", "2"), ("%who%", "Ana")]);
}

#[test]
fn test_params_apply_replaces_every_occurrence() {
    let params = Params::count(3);
    assert_eq!(params.apply("%count% / %count%"), "3 / 3");
    assert_eq!(Params::new().apply("%count% days"), "%count% days");
}

#[test]
fn test_translator_kind_from_str() {
    assert_eq!("choice".parse::<TranslatorKind>().unwrap(), TranslatorKind::Choice);
    assert_eq!("Plain".parse::<TranslatorKind>().unwrap(), TranslatorKind::Plain);
    assert_eq!("icu".parse::<TranslatorKind>().unwrap(), TranslatorKind::Plain);
    assert!(matches!(
        "gettext".parse::<TranslatorKind>(),
        Err(AgoError::Parse { .. })
    ));
}

#[test]
fn test_translator_kind_builds_matching_adapter() {
    let mut catalog = MessageCatalog::new("en");
    catalog.add("time", "diff.in.day", "{count, plural, one {in # day} other {in # days}}");

    let plain = TranslatorKind::Plain.build(catalog.clone(), false);
    let rendered = plain
        .render_plural("diff.in.day", 2, &Params::count(2), "time")
        .unwrap();
    assert_eq!(rendered, "in 2 days");

    let choice = TranslatorKind::Choice.build(catalog, false);
    assert_eq!(choice.locale(), "en");
}

#[test]
fn test_boxed_and_shared_translators_delegate() {
    let mut catalog = MessageCatalog::new("fr");
    catalog.add("time", "diff.empty", "maintenant");

    let boxed: Box<dyn Translator> = Box::new(ChoiceTranslator::new(catalog.clone()));
    assert_eq!(boxed.render("diff.empty", &Params::new(), "time").unwrap(), "maintenant");

    let shared = Arc::new(PlainTranslator::new(catalog));
    assert_eq!(shared.render("diff.empty", &Params::new(), "time").unwrap(), "maintenant");
    assert_eq!(shared.locale(), "fr");
}
