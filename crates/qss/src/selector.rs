//! Selector helpers.
//!
//! QSS selectors are kept as plain strings throughout the crate; this module
//! only knows how to split a comma-separated list and how to break a single
//! selector into the three pieces a style editor picks separately:
//!
//! ```text
//! QCheckBox::indicator:checked
//! ^^^^^^^^^  ^^^^^^^^^ ^^^^^^^
//!  widget     control   state
//! ```

use std::fmt;

use nom::{
    IResult,
    bytes::complete::{tag, take_till},
    character::complete::char,
    combinator::{opt, rest},
    sequence::preceded,
};

/// The universal selector, used when nothing narrower was picked.
pub const UNIVERSAL: &str = "*";

/// Placeholder a picker uses for "nothing selected".
pub const NO_PICK: &str = "-";

/// Splits `A, B ,C` into trimmed, non-empty selectors.
pub fn split_selector_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// A selector broken into widget type, sub-control and pseudo-state.
///
/// The control and state are stored without their leading `::` / `:`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorParts {
    pub widget: Option<String>,
    pub control: Option<String>,
    pub state: Option<String>,
}

impl SelectorParts {
    /// Decomposes a single selector.
    ///
    /// ```rust
    /// use qss::SelectorParts;
    ///
    /// let parts = SelectorParts::parse("QScrollBar::handle:hover");
    /// assert_eq!(parts.widget.as_deref(), Some("QScrollBar"));
    /// assert_eq!(parts.control.as_deref(), Some("handle"));
    /// assert_eq!(parts.state.as_deref(), Some("hover"));
    /// ```
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        match parse_parts(selector) {
            Ok((_, parts)) => parts,
            Err(_) => Self {
                widget: non_empty(selector),
                ..Self::default()
            },
        }
    }

    /// Builds parts from the three picker values.
    ///
    /// Empty strings and `-` mean "not picked". Leading colons are accepted,
    /// so `"::indicator"` and `"indicator"` are equivalent.
    pub fn from_picks(widget: &str, control: &str, state: &str) -> Self {
        Self {
            widget: pick(widget, ""),
            control: pick(control, ":"),
            state: pick(state, ":"),
        }
    }

    /// Renders the selector, falling back to `*` when nothing is set.
    pub fn compose(&self) -> String {
        self.to_string()
    }

    pub fn is_universal(&self) -> bool {
        self.control.is_none()
            && self.state.is_none()
            && self.widget.as_deref().is_none_or(|w| w == UNIVERSAL)
    }
}

impl fmt::Display for SelectorParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.widget.is_none() && self.control.is_none() && self.state.is_none() {
            return f.write_str(UNIVERSAL);
        }
        if let Some(widget) = &self.widget {
            f.write_str(widget)?;
        }
        if let Some(control) = &self.control {
            write!(f, "::{control}")?;
        }
        if let Some(state) = &self.state {
            write!(f, ":{state}")?;
        }
        Ok(())
    }
}

fn parse_parts(input: &str) -> IResult<&str, SelectorParts> {
    let (input, widget) = take_till(|c: char| c == ':')(input)?;
    let (input, control) = opt(preceded(tag("::"), take_till(|c: char| c == ':')))(input)?;
    let (input, state) = opt(preceded(char(':'), rest))(input)?;

    Ok((
        input,
        SelectorParts {
            widget: non_empty(widget),
            control: control.and_then(non_empty),
            state: state.and_then(non_empty),
        },
    ))
}

fn pick(value: &str, strip: &str) -> Option<String> {
    let value = value.trim();
    if value == NO_PICK {
        return None;
    }
    let value = if strip.is_empty() {
        value
    } else {
        value.trim_start_matches(strip)
    };
    non_empty(value)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
