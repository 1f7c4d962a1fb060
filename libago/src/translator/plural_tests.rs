use super::*;

#[test]
fn test_english_categories() {
    let en = PluralRule::for_locale("en");

    assert_eq!(en.categories(), ["one", "other"]);
    assert_eq!(en.category(1), "one");
    assert_eq!(en.category(0), "other");
    assert_eq!(en.category(21), "other");
    assert_eq!(en.form_index(1), 0);
    assert_eq!(en.form_index(2), 1);
}

#[test]
fn test_russian_categories() {
    let ru = PluralRule::for_locale("ru");

    assert_eq!(ru.categories(), ["one", "few", "many"]);
    let expected = [
        (1, "one"),
        (21, "one"),
        (2, "few"),
        (34, "few"),
        (5, "many"),
        (11, "many"),
        (112, "many"),
    ];
    for (count, category) in expected {
        assert_eq!(ru.category(count), category, "count {count}");
    }
    assert_eq!(ru.form_index(5), 2);
}

#[test]
fn test_negative_counts_use_absolute_value() {
    let ru = PluralRule::for_locale("ru");
    assert_eq!(ru.category(-21), "one");
}

#[test]
fn test_regional_locale_uses_language_rules() {
    let ru_ru = PluralRule::for_locale("ru_RU");

    assert_eq!(ru_ru.locale(), "ru_RU");
    assert_eq!(ru_ru.category(3), "few");
}

#[test]
fn test_unknown_locale_uses_english_rules() {
    let unknown = PluralRule::for_locale("not a locale");

    assert_eq!(unknown.category(1), "one");
    assert_eq!(unknown.category(3), "other");
}

#[test]
fn test_chain_rules_follow_catalog_fallbacks() {
    let en = MessageCatalog::new("en");
    let fr = MessageCatalog::new("fr").with_fallback(en);
    let ru = MessageCatalog::new("ru").with_fallback(fr);
    let rules = ChainRules::for_catalog(&ru);

    assert_eq!(rules.get("ru").category(5), "many");
    assert_eq!(rules.get("en").category(5), "other");
    assert_eq!(rules.get("fr").locale(), "fr");
    assert_eq!(rules.get("de").locale(), "ru");
}

#[test]
fn test_debug_lists_categories() {
    let debug = format!("{:?}", PluralRule::for_locale("en"));
    assert!(debug.contains("\"en\""));
    assert!(debug.contains("\"one\""));
}
