//! Integration tests for declaration handling inside blocks.

use qss::parser::parse_stylesheet;

fn value_of(source: &str, property: &str) -> Option<String> {
    let sheet = parse_stylesheet(source).unwrap();
    sheet.entries[0].properties.get(property).cloned()
}

// ============================================================================
// VALUES
// ============================================================================

#[test]
fn test_value_with_spaces() {
    assert_eq!(
        value_of("A {\n  border: 1px solid #000;\n}\n", "border").as_deref(),
        Some("1px solid #000")
    );
}

#[test]
fn test_value_split_on_first_colon_only() {
    assert_eq!(
        value_of("A { font: 10px \"Foo: Bar\"; }", "font").as_deref(),
        Some("10px \"Foo: Bar\"")
    );
}

#[test]
fn test_value_whitespace_trimmed() {
    assert_eq!(
        value_of("A {\n  color   :    red   ;   \n}\n", "color").as_deref(),
        Some("red")
    );
}

#[test]
fn test_important_kept_in_value() {
    assert_eq!(
        value_of("A {\n  color: red !important;\n}\n", "color").as_deref(),
        Some("red !important")
    );
}

// ============================================================================
// DROPPED DECLARATIONS
// ============================================================================

#[test]
fn test_url_values_are_dropped() {
    let sheet = parse_stylesheet("A {\n  background: url(x.png);\n}\n").unwrap();
    assert_eq!(sheet.len(), 1);
    assert!(sheet.entries[0].properties.is_empty());
}

#[test]
fn test_url_with_inner_delimiters_does_not_leak() {
    let sheet = parse_stylesheet(
        "A {\n  image: url(data:image/png;base64,AAAA);\n  color: red;\n}\n",
    )
    .unwrap();
    let keys: Vec<_> = sheet.entries[0].properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["color"]);
}

#[test]
fn test_malformed_line_is_skipped() {
    let sheet = parse_stylesheet("A {\n  this is not valid;\n  color: red;\n}\n").unwrap();
    let keys: Vec<_> = sheet.entries[0].properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["color"]);
}

#[test]
fn test_empty_value_is_skipped() {
    let sheet = parse_stylesheet("A {\n  color:;\n  margin: 1px;\n}\n").unwrap();
    let keys: Vec<_> = sheet.entries[0].properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["margin"]);
}

#[test]
fn test_several_declarations_on_one_line() {
    let sheet = parse_stylesheet("A {\n  color: red; margin: 1px; padding: 2px;\n}\n").unwrap();
    assert_eq!(sheet.entries[0].properties.len(), 3);
}

// ============================================================================
// MULTI-LINE VALUES
// ============================================================================

#[test]
fn test_gradient_spanning_lines() {
    let source = r#"
QProgressBar::chunk {
    background: qlineargradient(x1:0, y1:0, x2:0, y2:1,
        stop:0 #fafafa, stop:1 #d0d0d0);
    border-radius: 2px;
}
"#;
    let sheet = parse_stylesheet(source).unwrap();
    let properties = &sheet.entries[0].properties;
    assert_eq!(
        properties.get("background").map(String::as_str),
        Some("qlineargradient(x1:0, y1:0, x2:0, y2:1, stop:0 #fafafa, stop:1 #d0d0d0)")
    );
    assert_eq!(properties.get("border-radius").map(String::as_str), Some("2px"));
}

#[test]
fn test_missing_semicolon_before_next_declaration() {
    let sheet = parse_stylesheet("A {\n  color: red\n  margin: 1px;\n}\n").unwrap();
    let properties = &sheet.entries[0].properties;
    assert_eq!(properties.get("color").map(String::as_str), Some("red"));
    assert_eq!(properties.get("margin").map(String::as_str), Some("1px"));
}

#[test]
fn test_stray_text_does_not_swallow_next_declaration() {
    let sheet = parse_stylesheet("A {\n  oops\n  color: red;\n}\n").unwrap();
    let keys: Vec<_> = sheet.entries[0].properties.keys().map(String::as_str).collect();
    assert_eq!(keys, ["color"]);
}
