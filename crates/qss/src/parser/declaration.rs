//! Single `name: value` declarations.
//!
//! A declaration that cannot be read yields `None` and the caller moves on.

use nom::{
    IResult,
    bytes::complete::take_till1,
    character::complete::char,
    combinator::rest,
    sequence::separated_pair,
};

/// Values containing this marker are dropped.
pub const URL_MARKER: &str = "url";

/// A declaration that survived parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

fn name_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till1(|c: char| c == ':'), char(':'), rest)(input)
}

/// Parses one declaration, split on its first `:` only.
///
/// The value is trimmed and loses one trailing `;`. Returns `None` when there
/// is no `:`, when either side is empty, when the name is not a single word,
/// or when the value contains `url`.
///
/// ```rust
/// use qss::parser::declaration::parse_declaration;
///
/// let decl = parse_declaration("  font: 10px \"Foo: Bar\";").unwrap();
/// assert_eq!(decl.property, "font");
/// assert_eq!(decl.value, "10px \"Foo: Bar\"");
///
/// assert!(parse_declaration("not a declaration").is_none());
/// assert!(parse_declaration("background: url(x.png);").is_none());
/// ```
pub fn parse_declaration(input: &str) -> Option<Declaration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let (property, value) = match name_value(input) {
        Ok((_, pair)) => pair,
        Err(_) => {
            log::debug!("skipping malformed declaration {input:?}");
            return None;
        }
    };

    let property = property.trim();
    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();

    if property.is_empty() || value.is_empty() {
        log::debug!("skipping incomplete declaration {input:?}");
        return None;
    }
    if property.contains(|c: char| c.is_whitespace() || c == '{' || c == '}') {
        log::debug!("skipping declaration with invalid property name {property:?}");
        return None;
    }
    if value.contains(URL_MARKER) {
        log::debug!("dropping url declaration for {property:?}");
        return None;
    }

    Some(Declaration {
        property: property.to_string(),
        value: value.to_string(),
    })
}
