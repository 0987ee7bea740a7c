//! # QStyler
//!
//! The headless core of a Qt Style Sheet editor. The [`qss`] crate parses,
//! edits and serializes style sheets; this crate adds the persistence layer
//! a front-end needs around it:
//!
//! - [`Theme`]: one style sheet collapsed to `selector -> properties`, stored
//!   as JSON
//! - [`ThemeLibrary`]: named themes kept together in one JSON file
//! - [`write_stylesheet`]: save the live style sheet as a `.qss` file
//!
//! ```rust
//! use qstyler::{StyleStore, Theme};
//!
//! let mut store = StyleStore::new();
//! store.add_or_update("QPushButton", "color", "red");
//!
//! let json = Theme::from_store(&store).to_json().unwrap();
//! assert_eq!(json, r#"{"QPushButton":{"color":"red"}}"#);
//!
//! let mut restored = StyleStore::new();
//! Theme::from_json(&json).unwrap().apply_to(&mut restored);
//! assert_eq!(restored.serialize(), store.serialize());
//! ```

pub mod error;
pub mod theme;

pub use error::{QStylerError, Result};
pub use qss;
pub use theme::{Theme, ThemeLibrary, write_stylesheet};

pub use qss::{
    MergePolicy, ParseMode, Parser, Properties, QssError, SelectorParts, SharedStyleStore,
    StyleEntry, StyleSink, StyleStore, Stylesheet, parse_file, parse_stylesheet,
};
