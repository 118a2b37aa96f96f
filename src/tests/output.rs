use super::{write_section, OutputFormat};
use crate::section::Section;

fn sample() -> Section {
    Section {
        title: "v2.0.0 - 2022-01-01".to_string(),
        line_start: 1,
        line_end: 4,
        lines: vec![
            "## v2.0.0 - 2022-01-01".to_string(),
            "- Breaking change A".to_string(),
            "- Feature B".to_string(),
        ],
    }
}

#[test]
fn test_plain_writes_one_line_each() {
    let mut out = Vec::new();
    write_section(&mut out, &sample(), OutputFormat::Plain).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "## v2.0.0 - 2022-01-01\n- Breaking change A\n- Feature B\n"
    );
}

#[test]
fn test_plain_keeps_blank_lines() {
    let section = Section {
        title: "v1".to_string(),
        line_start: 0,
        line_end: 3,
        lines: vec!["## v1".to_string(), String::new(), "- a".to_string()],
    };
    let mut out = Vec::new();
    write_section(&mut out, &section, OutputFormat::Plain).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "## v1\n\n- a\n");
}

#[test]
fn test_json_fields() {
    let mut out = Vec::new();
    write_section(&mut out, &sample(), OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["title"], "v2.0.0 - 2022-01-01");
    assert_eq!(value["line_start"], 1);
    assert_eq!(value["line_end"], 4);
    assert_eq!(value["lines"].as_array().unwrap().len(), 3);
    assert_eq!(value["lines"][2], "- Feature B");
}

#[test]
fn test_default_format_is_plain() {
    assert_eq!(OutputFormat::default(), OutputFormat::Plain);
}
