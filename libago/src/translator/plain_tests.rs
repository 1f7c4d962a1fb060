use super::*;

fn en() -> PluralRule {
    PluralRule::for_locale("en")
}

const DAYS_AGO: &str = "{count, plural, =0 {today} one {# day ago} other {# days ago}}";

#[test]
fn test_expand_exact_branch_wins() {
    assert_eq!(expand_plural(DAYS_AGO, 0, &en()), "today");
}

#[test]
fn test_expand_one_and_other() {
    assert_eq!(expand_plural(DAYS_AGO, 1, &en()), "1 day ago");
    assert_eq!(expand_plural(DAYS_AGO, 5, &en()), "5 days ago");
}

#[test]
fn test_expand_keeps_surrounding_text() {
    let message = "about {n, plural, one {# hour} other {# hours}} ago";
    assert_eq!(expand_plural(message, 2, &en()), "about 2 hours ago");
}

#[test]
fn test_expand_leaves_plain_placeholders() {
    assert_eq!(expand_plural("il y a {count} mois", 4, &en()), "il y a {count} mois");
}

#[test]
fn test_expand_unbalanced_braces_left_alone() {
    let message = "broken {count, plural, one {#}";
    assert_eq!(expand_plural(message, 1, &en()), message);
}

#[test]
fn test_expand_without_other_branch() {
    let message = "{count, plural, one {# day}}";
    assert_eq!(expand_plural(message, 1, &en()), "1 day");
    assert_eq!(expand_plural(message, 2, &en()), message);
}

#[test]
fn test_block_len_nested() {
    assert_eq!(block_len("{a {b} c} tail"), Some(9));
    assert_eq!(block_len("{open"), None);
}

#[test]
fn test_substitute_both_placeholder_styles() {
    let params = Params::count(3);
    assert_eq!(substitute("%count% / {count}", &params), "3 / 3");
}

#[test]
fn test_render_plural_from_catalog() {
    let mut catalog = MessageCatalog::new("fr");
    catalog.add("time", "diff.in.month", "dans {count} mois");
    catalog.add(
        "time",
        "diff.ago.hour",
        "{count, plural, =0 {il y a # heure} one {il y a # heure} other {il y a # heures}}",
    );
    let translator = PlainTranslator::new(catalog);

    let month = translator
        .render_plural("diff.in.month", 2, &Params::count(2), "time")
        .unwrap();
    let hours = translator
        .render_plural("diff.ago.hour", 5, &Params::count(5), "time")
        .unwrap();

    assert_eq!(month, "dans 2 mois");
    assert_eq!(hours, "il y a 5 heures");
}

#[test]
fn test_render_without_plural_selection() {
    let mut catalog = MessageCatalog::new("en");
    catalog.add("time", "diff.empty", "now");
    let translator = PlainTranslator::new(catalog);

    assert_eq!(translator.render("diff.empty", &Params::new(), "time").unwrap(), "now");
}

#[test]
fn test_render_missing_key_strict() {
    let translator = PlainTranslator::new(MessageCatalog::new("en")).strict(true);
    let result = translator.render_plural("year", 1, &Params::count(1), "time");
    assert!(matches!(result, Err(crate::error::AgoError::MissingMessage { .. })));
}

#[test]
fn test_expand_selects_locale_category() {
    let ru = PluralRule::for_locale("ru");
    let message = "{count, plural, one {# день назад} few {# дня назад} many {# дней назад} other {# дня назад}}";

    assert_eq!(expand_plural(message, 1, &ru), "1 день назад");
    assert_eq!(expand_plural(message, 21, &ru), "21 день назад");
    assert_eq!(expand_plural(message, 3, &ru), "3 дня назад");
    assert_eq!(expand_plural(message, 5, &ru), "5 дней назад");
    assert_eq!(expand_plural(message, 12, &ru), "12 дней назад");
}

#[test]
fn test_expand_exact_branch_beats_category() {
    let ru = PluralRule::for_locale("ru");
    let message = "{count, plural, =1 {вчера} one {# день назад} other {# дней назад}}";

    assert_eq!(expand_plural(message, 1, &ru), "вчера");
    assert_eq!(expand_plural(message, 31, &ru), "31 день назад");
}

#[test]
fn test_expand_unlisted_category_uses_other() {
    let ru = PluralRule::for_locale("ru");
    let message = "{count, plural, one {# день} other {# дн.}}";
    assert_eq!(expand_plural(message, 5, &ru), "5 дн.");
}
