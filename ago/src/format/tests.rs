use super::*;
use crate::context::CliOverrides;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
struct TestData {
    name: String,
    value: i32,
}

impl Formattable for TestData {
    fn format_pretty(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

fn context(color: ColorChoice) -> AppContext {
    AppContext::resolve(
        std::path::Path::new("/nonexistent/ago/config.yaml"),
        None,
        color,
        CliOverrides::default(),
    )
}

#[test]
fn test_output_format_from_string() {
    assert_eq!(OutputFormat::from("pretty"), OutputFormat::Pretty);
    assert_eq!(OutputFormat::from("json"), OutputFormat::Json);
    assert_eq!(OutputFormat::from("YAML"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from("invalid"), OutputFormat::Pretty);
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("Never"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::from("whatever"), ColorChoice::Auto);
}

#[test]
fn test_color_choice_display() {
    assert_eq!(ColorChoice::Always.to_string(), "always");
    assert_eq!(ColorChoice::Never.to_string(), "never");
    assert_eq!(ColorChoice::Auto.to_string(), "auto");
}

#[test]
fn test_should_color_explicit_choices() {
    assert!(should_color(&context(ColorChoice::Always)));
    assert!(!should_color(&context(ColorChoice::Never)));
}

#[test]
fn test_format_pretty() {
    let data = TestData {
        name: "test".to_string(),
        value: 42,
    };
    let result = format_output(&data, OutputFormat::Pretty);
    assert_eq!(result.unwrap(), "test: 42");
}

#[test]
fn test_format_json() {
    let data = TestData {
        name: "test".to_string(),
        value: 42,
    };
    let result = format_output(&data, OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert_eq!(json["name"], "test");
    assert_eq!(json["value"], 42);
}

#[test]
fn test_format_yaml() {
    let data = TestData {
        name: "test".to_string(),
        value: 42,
    };
    let result = format_output(&data, OutputFormat::Yaml).unwrap();
    assert!(result.contains("name: test"));
    assert!(result.contains("value: 42"));
}

#[test]
fn test_format_vec_pretty() {
    let data = vec![
        TestData {
            name: "first".to_string(),
            value: 1,
        },
        TestData {
            name: "second".to_string(),
            value: 2,
        },
    ];
    let output = format_output_vec(&data, OutputFormat::Pretty).unwrap();
    assert_eq!(output, "first: 1\nsecond: 2");
}

#[test]
fn test_format_vec_json() {
    let data = vec![
        TestData {
            name: "first".to_string(),
            value: 1,
        },
        TestData {
            name: "second".to_string(),
            value: 2,
        },
    ];
    let result = format_output_vec(&data, OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[test]
fn test_format_empty_vec() {
    let data: Vec<TestData> = vec![];
    let result = format_output_vec(&data, OutputFormat::Pretty);
    assert_eq!(result.unwrap(), "");
}
