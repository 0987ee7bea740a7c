//! Block comment removal.
//!
//! Comments are stripped before any structure is recognised, so a comment
//! may sit between rules, inside a block or after a declaration. Line breaks
//! inside a comment are kept, which keeps line numbers in later errors
//! pointing at the original text.

/// Where an unterminated comment started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenComment {
    /// 0-based line of the `/*`.
    pub line: usize,
}

/// The source with every `/* ... */` removed.
#[derive(Debug)]
pub struct Stripped {
    pub text: String,
    /// Set when the input ended inside a comment. Everything after the `/*`
    /// has been dropped from `text`.
    pub unterminated: Option<OpenComment>,
}

pub fn strip_comments(source: &str) -> Stripped {
    let mut text = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut line = 0;

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        if c != '/' || chars.peek() != Some(&'*') {
            text.push(c);
            continue;
        }

        chars.next();
        let opened = line;
        let mut closed = false;
        while let Some(inner) = chars.next() {
            if inner == '\n' {
                line += 1;
                text.push('\n');
            } else if inner == '*' && chars.peek() == Some(&'/') {
                chars.next();
                closed = true;
                break;
            }
        }

        if !closed {
            return Stripped {
                text,
                unterminated: Some(OpenComment { line: opened }),
            };
        }
    }

    Stripped {
        text,
        unterminated: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_line_count() {
        let stripped = strip_comments("/* a\nb */\nA {\n}");
        assert_eq!(stripped.text, "\n\nA {\n}");
        assert_eq!(stripped.unterminated, None);
    }

    #[test]
    fn keeps_text_around_inline_comment() {
        let stripped = strip_comments("color: red; /* note */ width: 1px;");
        assert_eq!(stripped.text, "color: red;  width: 1px;");
    }

    #[test]
    fn reports_unterminated_comment_line() {
        let stripped = strip_comments("A {\n}\n/* open\nB {");
        assert_eq!(stripped.text, "A {\n}\n\n");
        assert_eq!(stripped.unterminated, Some(OpenComment { line: 2 }));
    }
}
