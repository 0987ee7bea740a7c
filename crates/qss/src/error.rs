//! Error types for QSS parsing.
//!
//! Malformed declarations are never errors: the parser skips them so a
//! buffer that is half-typed still produces everything that is readable.
//! Only structural failures, where the scan cannot tell where a comment,
//! selector list or block ends, are reported.

use std::fmt;

use thiserror::Error;

/// The structure that was still open when the input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construct {
    /// A `/*` without a matching `*/`.
    Comment,
    /// Selector text that never reached its `{`.
    SelectorList,
    /// A `{` without a matching `}`.
    Block,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::Comment => f.write_str("comment"),
            Construct::SelectorList => f.write_str("selector list"),
            Construct::Block => f.write_str("block"),
        }
    }
}

/// Errors that can occur while reading a style sheet.
///
/// # Examples
///
/// ```rust
/// use qss::parser::parse_stylesheet;
/// use qss::{Construct, QssError};
///
/// let err = parse_stylesheet("QPushButton {\n    color: red;\n").unwrap_err();
/// assert!(matches!(err, QssError::Unterminated { construct: Construct::Block, .. }));
/// assert_eq!(err.line(), Some(3));
/// ```
#[derive(Error, Debug)]
pub enum QssError {
    /// The scan reached the end of input inside an open construct.
    ///
    /// `opened` is the 0-based line the construct started on, `line` the
    /// 0-based line index at which the input ran out.
    #[error("unterminated {construct} opened on line {opened}, parse failed near line {line}")]
    Unterminated {
        construct: Construct,
        opened: usize,
        line: usize,
    },

    /// An I/O error occurred while reading a style sheet file.
    #[error("I/O error reading style sheet")]
    Io(#[from] std::io::Error),
}

impl QssError {
    /// The line to report as "error near line N", when the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            QssError::Unterminated { line, .. } => Some(*line),
            QssError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QssError>;
