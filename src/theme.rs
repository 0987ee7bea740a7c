//! Theme persistence.
//!
//! A theme is a style sheet collapsed to a single JSON object keyed by
//! selector:
//!
//! ```json
//! {
//!     "QPushButton": { "color": "red", "border": "1px solid #000" },
//!     "QPushButton:hover": { "color": "white" }
//! }
//! ```
//!
//! Collapsing is lossy: when a style sheet has several blocks for the same
//! selector, the last block wins and the selector keeps the position of its
//! first appearance. A [`ThemeLibrary`] keeps named themes together in one
//! JSON file.
//!
//! JSON keeps values exactly. The `.qss` text from [`Theme::to_qss`] and
//! [`write_stylesheet`] does not: a value holding `;`, even inside quotes,
//! is cut at that `;` when the file is parsed again.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use qss::{OrderedMap, Properties, StyleEntry, StyleStore, Stylesheet};
use serde::{Deserialize, Serialize};

use crate::error::{QStylerError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    rules: OrderedMap<String, Properties>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses entries into a theme, last entry per selector winning.
    pub fn from_entries(entries: &[StyleEntry]) -> Self {
        let rules = entries
            .iter()
            .map(|entry| (entry.selector.clone(), entry.properties.clone()))
            .collect();
        Self { rules }
    }

    pub fn from_store(store: &StyleStore) -> Self {
        Self::from_entries(store.entries())
    }

    pub fn from_stylesheet(sheet: &Stylesheet) -> Self {
        Self {
            rules: sheet.flatten(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// One entry per selector, in theme order.
    pub fn to_entries(&self) -> Vec<StyleEntry> {
        self.rules
            .iter()
            .map(|(selector, properties)| StyleEntry::new(selector.clone(), properties.clone()))
            .collect()
    }

    /// Replaces the store's contents with this theme.
    pub fn apply_to(&self, store: &mut StyleStore) {
        store.load(self.to_entries());
    }

    /// The theme rendered as style sheet text.
    pub fn to_qss(&self) -> String {
        Stylesheet::new(self.to_entries()).to_string()
    }

    pub fn get(&self, selector: &str) -> Option<&Properties> {
        self.rules.get(selector)
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Named themes, persisted as one JSON object `{ name: theme }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeLibrary {
    themes: BTreeMap<String, Theme>,
}

impl ThemeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a library file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| QStylerError::io(path, e))?;
        let library: Self = serde_json::from_str(&json)?;
        log::debug!("loaded {} themes from {}", library.len(), path.display());
        Ok(library)
    }

    /// Reads a library file, starting empty when it does not exist yet.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no theme library at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Writes the library as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| QStylerError::io(path, e))?;
        log::debug!("saved {} themes to {}", self.len(), path.display());
        Ok(())
    }

    /// Adds or replaces a theme, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) -> Option<Theme> {
        self.themes.insert(name.into(), theme)
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Theme> {
        self.themes.remove(name)
    }

    /// Theme names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Parses a `.qss` file and stores it under `name`.
    pub fn import_qss(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<&Theme> {
        let name = name.into();
        let sheet = qss::parse_file(path.as_ref())?;
        log::debug!(
            "importing {} as theme {name:?} ({} entries)",
            path.as_ref().display(),
            sheet.len()
        );
        let theme = Theme::from_stylesheet(&sheet);
        Ok(match self.themes.entry(name) {
            Entry::Occupied(mut slot) => {
                slot.insert(theme);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(theme),
        })
    }

    /// Loads the named theme into `store`, replacing its contents.
    pub fn apply(&self, name: &str, store: &mut StyleStore) -> Result<()> {
        let theme = self
            .get(name)
            .ok_or_else(|| QStylerError::UnknownTheme(name.to_string()))?;
        theme.apply_to(store);
        Ok(())
    }
}

/// Saves the store's current style sheet text to `path`.
///
/// Values holding `;` do not survive reading the file back; see the
/// module docs.
pub fn write_stylesheet(store: &StyleStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, store.serialize()).map_err(|e| QStylerError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_keeps_first_position_last_value() {
        let entries = vec![
            StyleEntry::with_property("A", "x", "1"),
            StyleEntry::with_property("B", "y", "1"),
            StyleEntry::with_property("A", "z", "2"),
        ];
        let theme = Theme::from_entries(&entries);
        let selectors: Vec<_> = theme.selectors().collect();
        assert_eq!(selectors, ["A", "B"]);
        assert_eq!(
            theme.get("A"),
            Some(&Properties::from([("z".to_string(), "2".to_string())]))
        );
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let library = ThemeLibrary::new();
        let mut store = StyleStore::new();
        let err = library.apply("missing", &mut store).unwrap_err();
        assert!(matches!(err, QStylerError::UnknownTheme(name) if name == "missing"));
    }
}
