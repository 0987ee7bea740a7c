//! QSS parsing.
//!
//! This module turns style sheet text into an ordered list of
//! [`StyleEntry`] values:
//!
//! - [`parse_stylesheet`]: Main entry point, strict mode
//! - [`parse_file`]: Same, reading the text from a path first
//! - [`Parser`]: Explicit [`ParseMode`] selection
//!
//! ## Submodules
//!
//! - [`comments`]: `/* */` removal ahead of scanning
//! - [`scanner`]: Line cursor used by the block scanner
//! - [`declaration`]: Single `name: value` declarations
//! - [`stylesheet`]: [`StyleEntry`] and [`Stylesheet`]
//!
//! ## Example
//!
//! ```rust
//! use qss::parser::parse_stylesheet;
//!
//! let sheet = parse_stylesheet("QPushButton, QToolButton {\n    color: red;\n}\n").unwrap();
//! assert_eq!(sheet.entries.len(), 2);
//! assert_eq!(sheet.entries[1].selector, "QToolButton");
//! assert_eq!(sheet.entries[1].properties.get("color").map(String::as_str), Some("red"));
//! ```

pub mod comments;
pub mod declaration;
pub mod scanner;
pub mod stylesheet;

use std::path::Path;

pub use crate::parser::declaration::{Declaration, parse_declaration};
pub use crate::parser::stylesheet::{StyleEntry, Stylesheet};

use crate::error::{Construct, QssError, Result};
use crate::ordered::Properties;
use crate::parser::comments::strip_comments;
use crate::parser::scanner::LineScanner;
use crate::selector::split_selector_list;

/// What to do when the input ends inside an open comment, selector list or
/// block.
///
/// Malformed declarations are skipped in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Fail with [`QssError::Unterminated`], carrying the line reached.
    #[default]
    Strict,
    /// Keep whatever was collected, logging a warning.
    Lenient,
}

/// Parses a full style sheet in [`ParseMode::Strict`].
pub fn parse_stylesheet(source: &str) -> Result<Stylesheet> {
    Parser::default().parse(source)
}

/// Reads and parses a style sheet file in [`ParseMode::Strict`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Stylesheet> {
    let path = path.as_ref();
    log::debug!("reading style sheet {}", path.display());
    let source = std::fs::read_to_string(path)?;
    parse_stylesheet(&source)
}

/// Outcome of reading a selector list.
enum Header {
    Selectors(Vec<String>),
    /// A stray `}` ended the header; there is no block to read.
    Skipped,
    /// Input ran out before `{` (lenient mode only).
    Exhausted,
}

/// A style sheet parser. Holds no state between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser {
    mode: ParseMode,
}

impl Parser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(ParseMode::Lenient)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn parse(&self, source: &str) -> Result<Stylesheet> {
        let stripped = strip_comments(source);
        if let Some(open) = stripped.unterminated {
            self.unterminated(Construct::Comment, open.line, source.split('\n').count())?;
        }

        let mut scanner = LineScanner::new(&stripped.text);
        let mut entries = Vec::new();

        while scanner.skip_blank() {
            let selectors = match self.read_header(&mut scanner)? {
                Header::Selectors(selectors) => selectors,
                Header::Skipped => continue,
                Header::Exhausted => break,
            };
            let opened = scanner.line();
            let properties = self.read_block(&mut scanner)?;

            if selectors.is_empty() {
                log::warn!("skipping block without selectors on line {opened}");
                continue;
            }
            for selector in selectors {
                entries.push(StyleEntry::new(selector, properties.clone()));
            }
        }

        log::trace!("parsed {} style entries", entries.len());
        Ok(Stylesheet::new(entries))
    }

    /// Collects header text up to the opening `{` and splits it on `,`.
    fn read_header(&self, scanner: &mut LineScanner<'_>) -> Result<Header> {
        let opened = scanner.line();
        let mut header: Vec<&str> = Vec::new();

        while let Some(rest) = scanner.peek() {
            match rest.find(['{', '}']) {
                Some(i) if rest[i..].starts_with('{') => {
                    header.push(&rest[..i]);
                    scanner.consume(i + 1);
                    return Ok(Header::Selectors(join_selectors(&header)));
                }
                Some(i) => {
                    log::warn!("skipping stray `}}` on line {}", scanner.line());
                    scanner.consume(i + 1);
                    return Ok(Header::Skipped);
                }
                None => {
                    header.push(rest);
                    scanner.advance();
                }
            }
        }

        self.unterminated(Construct::SelectorList, opened, scanner.line())?;
        Ok(Header::Exhausted)
    }

    /// Reads declarations up to and including the closing `}`.
    ///
    /// A declaration ends at `;` or at the `}`. An unfinished value (a
    /// trailing `,` or an open `(`) continues on the next line, as does any
    /// text that does not itself start a new declaration.
    fn read_block(&self, scanner: &mut LineScanner<'_>) -> Result<Properties> {
        let opened = scanner.line();
        let mut properties = Properties::new();
        let mut pending = String::new();

        while let Some(rest) = scanner.peek() {
            if let Some(i) = rest.find('}') {
                push_line(&mut pending, &rest[..i], &mut properties);
                flush_all(&mut pending, &mut properties);
                scanner.consume(i + 1);
                return Ok(properties);
            }

            push_line(&mut pending, rest, &mut properties);
            if rest.contains(';') {
                flush_complete(&mut pending, &mut properties);
            }
            scanner.advance();
        }

        self.unterminated(Construct::Block, opened, scanner.line())?;
        flush_all(&mut pending, &mut properties);
        Ok(properties)
    }

    /// Fails in strict mode, warns in lenient mode.
    fn unterminated(&self, construct: Construct, opened: usize, line: usize) -> Result<()> {
        match self.mode {
            ParseMode::Strict => Err(QssError::Unterminated {
                construct,
                opened,
                line,
            }),
            ParseMode::Lenient => {
                log::warn!("unterminated {construct} opened on line {opened}, keeping what was read");
                Ok(())
            }
        }
    }
}

fn join_selectors(header: &[&str]) -> Vec<String> {
    let text = header
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    split_selector_list(&text).map(String::from).collect()
}

/// Adds one line of block text to the pending declaration text.
fn push_line(pending: &mut String, line: &str, properties: &mut Properties) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    if pending.is_empty() {
        if !line.contains(':') {
            log::debug!("skipping malformed line {line:?}");
            return;
        }
    } else if !is_unfinished(pending) && starts_declaration(line) {
        flush_all(pending, properties);
    }

    if !pending.is_empty() {
        pending.push(' ');
    }
    pending.push_str(line);
}

fn is_unfinished(pending: &str) -> bool {
    pending.ends_with(',') || pending.matches('(').count() > pending.matches(')').count()
}

fn starts_declaration(line: &str) -> bool {
    match line.find(':') {
        Some(i) if i > 0 => line[..i]
            .trim_end()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        _ => false,
    }
}

/// Applies every declaration terminated by `;`, keeping the tail pending.
fn flush_complete(pending: &mut String, properties: &mut Properties) {
    if let Some(end) = pending.rfind(';') {
        apply_declarations(&pending[..end], properties);
        *pending = pending[end + 1..].trim().to_string();
    }
}

fn flush_all(pending: &mut String, properties: &mut Properties) {
    apply_declarations(pending, properties);
    pending.clear();
}

fn apply_declarations(text: &str, properties: &mut Properties) {
    for decl in text.split(';').filter_map(parse_declaration) {
        properties.insert(decl.property, decl.value);
    }
}
