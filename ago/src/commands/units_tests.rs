use super::*;

#[test]
fn test_list_units_order() {
    let names: Vec<&str> = list_units().iter().map(|row| row.name).collect();
    assert_eq!(
        names,
        vec!["year", "month", "day", "hour", "minute", "second"]
    );
}

#[test]
fn test_minute_code_is_i() {
    let minute = list_units().into_iter().find(|row| row.name == "minute").unwrap();
    assert_eq!(minute.code, "i");
}

#[test]
fn test_units_pretty() {
    let output = format::format_output_vec(&list_units(), OutputFormat::Pretty).unwrap();
    let first = output.lines().next().unwrap();
    assert_eq!(first, "y    year");
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn test_units_json() {
    let output = format::format_output_vec(&list_units(), OutputFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json[4]["code"], "i");
    assert_eq!(json[4]["name"], "minute");
}
