use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.locale, "en");
    assert_eq!(config.fallback_locale, "en");
    assert_eq!(config.translator, TranslatorKind::Choice);
    assert!(!config.strict);
    assert_eq!(config.domain, "time");
    assert!(config.precision.is_empty());
    assert!(config.catalogs.is_empty());
}

#[test]
fn test_from_str_empty_yaml() {
    let config = Config::from_yaml_str("").unwrap();
    // Should be equivalent to default
    assert_eq!(config, Config::default());
}

#[test]
fn test_from_str_partial_yaml() {
    let yaml = r#"
locale: fr
strict: true
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.locale, "fr");
    assert!(config.strict);

    // Check that other values are still default
    assert_eq!(config.fallback_locale, "en");
    assert_eq!(config.translator, TranslatorKind::Choice);
}

#[test]
fn test_from_str_full_yaml() {
    let yaml = r#"
locale: de
fallback_locale: fr
translator: plain
strict: false
domain: relative
precision: [y, month, D]
catalogs:
  - locale: de
    path: /etc/ago/time.de.yaml
  - locale: DE
    path: /etc/ago/extra.de.yaml
  - locale: it
    path: /etc/ago/time.it.yaml
"#;
    let config = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(config.locale, "de");
    assert_eq!(config.fallback_locale, "fr");
    assert_eq!(config.translator, TranslatorKind::Plain);
    assert_eq!(config.domain, "relative");
    assert_eq!(
        config.precision_units().unwrap(),
        vec![TimeUnit::Year, TimeUnit::Month, TimeUnit::Day]
    );
    assert_eq!(config.catalogs.len(), 3);

    let german: Vec<&Path> = config.catalogs_for("de").collect();
    assert_eq!(
        german,
        vec![
            Path::new("/etc/ago/time.de.yaml"),
            Path::new("/etc/ago/extra.de.yaml")
        ]
    );
}

#[test]
fn test_from_str_invalid_translator() {
    let result = Config::from_yaml_str("translator: gettext");
    assert!(matches!(result, Err(AgoError::Config { .. })));
}

#[test]
fn test_from_str_unknown_field() {
    // config-rs should ignore unknown fields
    let result = Config::from_yaml_str("unknown_field: true");
    assert!(result.is_ok());
}

#[test]
fn test_invalid_precision_is_a_config_error() {
    let config = Config::from_yaml_str("precision: [year, week]").unwrap();
    assert!(matches!(config.precision_units(), Err(AgoError::Config { .. })));
}

#[test]
fn test_load_without_path_returns_defaults() {
    assert_eq!(Config::load(None).unwrap(), Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "locale: fr\ntranslator: plain").unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.locale, "fr");
    assert_eq!(config.translator, TranslatorKind::Plain);
}

#[test]
fn test_load_missing_file_reports_path() {
    let path = Path::new("/nonexistent/ago/config.yaml");
    let err = Config::load(Some(path)).unwrap_err();

    match err {
        AgoError::Config { path: Some(p), .. } => assert!(p.contains("config.yaml")),
        other => panic!("unexpected error: {other:?}"),
    }
}
