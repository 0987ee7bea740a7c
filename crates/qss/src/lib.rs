//! # QSS - Qt Style Sheet Parser
//!
//! Reads Qt Style Sheet text into an ordered list of `(selector, properties)`
//! entries, keeps those entries editable, and writes them back out in a
//! stable text form. This crate provides:
//!
//! - **Parsing**: Convert QSS source text into a [`Stylesheet`](parser::Stylesheet)
//! - **Store**: Edit entries per selector, query them, and merge the
//!   properties shared by several selectors
//! - **Serialization**: Render entries back to QSS
//!
//! ## Quick Start
//!
//! ```rust
//! use qss::StyleStore;
//!
//! let source = r#"
//! /* buttons */
//! QPushButton, QToolButton {
//!     color: #eeeeee;
//!     border: 1px solid #000;
//! }
//! "#;
//!
//! let mut store = StyleStore::from_source(source).expect("valid QSS");
//! store.add_or_update("QPushButton:hover", "color", "white");
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(
//!     store.serialize(),
//!     "QPushButton {\n    color: #eeeeee;\n    border: 1px solid #000;\n}\n\
//!      QToolButton {\n    color: #eeeeee;\n    border: 1px solid #000;\n}\n\
//!      QPushButton:hover {\n    color: white;\n}\n"
//! );
//! ```
//!
//! ## Grammar
//!
//! The scanner is line oriented and lenient about declarations:
//!
//! - `/* */` comments anywhere, including across lines
//! - Selector lists split on `,`, one entry per selector
//! - Declarations split on the first `:`; a value may span lines until `;`
//! - Malformed declarations are skipped
//! - Values containing `url` are dropped
//!
//! Input that ends inside a comment, selector list or block fails with
//! [`QssError::Unterminated`] unless [`ParseMode::Lenient`](parser::ParseMode)
//! is used.
//!
//! ## Modules
//!
//! - [`parser`]: Parsing and the entry data structures
//! - [`store`]: The editable entry collection
//! - [`shared`]: Mutex-guarded store handle
//! - [`selector`]: Selector list splitting and widget/control/state parts
//! - [`ordered`]: Insertion-ordered map
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod ordered;
pub mod parser;
pub mod selector;
pub mod shared;
pub mod store;

pub use error::{Construct, QssError, Result};
pub use ordered::{OrderedMap, Properties};
pub use parser::{ParseMode, Parser, StyleEntry, Stylesheet, parse_file, parse_stylesheet};
pub use selector::SelectorParts;
pub use shared::SharedStyleStore;
pub use store::{MergePolicy, StyleSink, StyleStore};
