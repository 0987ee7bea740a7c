use std::fmt;

use crate::ordered::{OrderedMap, Properties};

/// Indentation used for each declaration in serialized output.
pub const INDENT: &str = "    ";

/// One rule block: a single selector and its declarations.
///
/// A source block with a selector list (`A, B { ... }`) produces one entry
/// per selector, each owning its own copy of the declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleEntry {
    pub selector: String,
    pub properties: Properties,
}

impl StyleEntry {
    pub fn new(selector: impl Into<String>, properties: Properties) -> Self {
        Self {
            selector: selector.into(),
            properties,
        }
    }

    /// Shorthand for an entry holding a single declaration.
    pub fn with_property(
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut properties = Properties::new();
        properties.insert(property.into(), value.into());
        Self::new(selector, properties)
    }
}

impl fmt::Display for StyleEntry {
    /// Writes the block in the canonical form:
    ///
    /// ```text
    /// QPushButton {
    ///     color: red;
    /// }
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (property, value) in &self.properties {
            writeln!(f, "{INDENT}{property}: {value};")?;
        }
        writeln!(f, "}}")
    }
}

/// The ordered result of parsing a style sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub entries: Vec<StyleEntry>,
}

impl Stylesheet {
    pub fn new(entries: Vec<StyleEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<StyleEntry> {
        self.entries
    }

    /// Collapses the entries into one map keyed by selector.
    ///
    /// When a selector appears more than once, the last block's declarations
    /// replace the earlier ones wholesale while the selector keeps the
    /// position of its first appearance. This step is lossy by nature.
    pub fn flatten(&self) -> OrderedMap<String, Properties> {
        self.entries
            .iter()
            .map(|entry| (entry.selector.clone(), entry.properties.clone()))
            .collect()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            entry.fmt(f)?;
        }
        Ok(())
    }
}

impl From<Vec<StyleEntry>> for Stylesheet {
    fn from(entries: Vec<StyleEntry>) -> Self {
        Self::new(entries)
    }
}

impl IntoIterator for Stylesheet {
    type Item = StyleEntry;
    type IntoIter = std::vec::IntoIter<StyleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
