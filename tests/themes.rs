//! Integration tests for theme persistence.

use std::path::{Path, PathBuf};

use qstyler::{QStylerError, StyleStore, Theme, ThemeLibrary, write_stylesheet};

/// A path under the temp dir, removed again when dropped.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str) -> Self {
        let file = format!("qstyler-{}-{name}", std::process::id());
        Self(std::env::temp_dir().join(file))
    }
}

impl AsRef<Path> for ScratchFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

const DARK: &str = r#"
/* dark */
QWidget {
    background-color: #2b2b2b;
    color: #dddddd;
}
QPushButton, QToolButton {
    border: 1px solid #555;
}
QPushButton {
    border: 1px solid #3daee9;
}
"#;

// ============================================================================
// THEME
// ============================================================================

#[test]
fn test_theme_json_keeps_selector_order() {
    let store = StyleStore::from_source(DARK).unwrap();
    let theme = Theme::from_store(&store);
    let selectors: Vec<_> = theme.selectors().collect();
    assert_eq!(selectors, ["QWidget", "QPushButton", "QToolButton"]);

    insta::assert_snapshot!(theme.to_json().unwrap(), @r##"{"QWidget":{"background-color":"#2b2b2b","color":"#dddddd"},"QPushButton":{"border":"1px solid #3daee9"},"QToolButton":{"border":"1px solid #555"}}"##);
}

#[test]
fn test_theme_round_trip_merges_duplicates() {
    let store = StyleStore::from_source(DARK).unwrap();
    assert_eq!(store.len(), 4);

    let json = Theme::from_store(&store).to_json().unwrap();
    let mut restored = StyleStore::new();
    Theme::from_json(&json).unwrap().apply_to(&mut restored);

    assert_eq!(restored.len(), 3);
    assert_eq!(
        restored.get("QPushButton").get("border").map(String::as_str),
        Some("1px solid #3daee9")
    );
}

#[test]
fn test_theme_to_qss_reparses() {
    let theme = Theme::from_json(r#"{"QLabel":{"color":"red"},"QLabel:disabled":{"color":"gray"}}"#)
        .unwrap();
    assert_eq!(
        theme.to_qss(),
        "QLabel {\n    color: red;\n}\nQLabel:disabled {\n    color: gray;\n}\n"
    );
    let store = StyleStore::from_source(&theme.to_qss()).unwrap();
    assert_eq!(Theme::from_store(&store), theme);
}

#[test]
fn test_invalid_theme_json() {
    let err = Theme::from_json(r#"{"QLabel": "red"}"#).unwrap_err();
    assert!(matches!(err, QStylerError::Json(_)));
}

// ============================================================================
// LIBRARY
// ============================================================================

#[test]
fn test_library_save_and_load() {
    let path = ScratchFile::new("library.json");
    let mut library = ThemeLibrary::new();
    library.insert("dark", Theme::from_store(&StyleStore::from_source(DARK).unwrap()));
    library.insert(
        "plain",
        Theme::from_json(r#"{"*":{"font-size":"10pt"}}"#).unwrap(),
    );
    library.save(&path).unwrap();

    let loaded = ThemeLibrary::load(&path).unwrap();
    assert_eq!(loaded, library);
    let names: Vec<_> = loaded.names().collect();
    assert_eq!(names, ["dark", "plain"]);
}

#[test]
fn test_library_load_or_default_missing_file() {
    let library = ThemeLibrary::load_or_default(ScratchFile::new("does-not-exist.json")).unwrap();
    assert!(library.is_empty());
}

#[test]
fn test_library_load_missing_file_reports_path() {
    let path = ScratchFile::new("also-missing.json");
    let err = ThemeLibrary::load(&path).unwrap_err();
    match err {
        QStylerError::Io { path: reported, .. } => assert_eq!(reported, path.0),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_import_qss_and_apply() {
    let path = ScratchFile::new("dark.qss");
    std::fs::write(&path, DARK).unwrap();

    let mut library = ThemeLibrary::new();
    let theme = library.import_qss("dark", &path).unwrap();
    assert_eq!(theme.len(), 3);

    let mut store = StyleStore::new();
    store.add_or_update("QSlider", "height", "4px");
    library.apply("dark", &mut store).unwrap();
    assert!(store.get("QSlider").is_empty());
    assert_eq!(store.len(), 3);
}

#[test]
fn test_import_malformed_qss_reports_line() {
    let path = ScratchFile::new("broken.qss");
    std::fs::write(&path, "QLabel {\n    color: red;\n").unwrap();

    let err = ThemeLibrary::new().import_qss("broken", &path).unwrap_err();
    match err {
        QStylerError::Qss(inner) => assert_eq!(inner.line(), Some(3)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_apply_unknown_theme() {
    let err = ThemeLibrary::new()
        .apply("nope", &mut StyleStore::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "No theme named \"nope\"");
}

// ============================================================================
// STYLE SHEET FILES
// ============================================================================

#[test]
fn test_write_stylesheet_then_parse_file() {
    let path = ScratchFile::new("saved.qss");
    let mut store = StyleStore::new();
    store.add_or_update("QPushButton", "color", "red");
    store.add_or_update("QPushButton:hover", "color", "white");
    write_stylesheet(&store, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), store.serialize());
    let sheet = qstyler::parse_file(&path).unwrap();
    assert_eq!(sheet.entries, store.entries());
}
