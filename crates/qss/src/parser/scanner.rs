/// Cursor over the lines of a (comment-free) style sheet.
///
/// The cursor sits on a line and a byte column within it, so a caller can
/// consume part of a line and leave the rest for the next step, as in
/// `A { x: 1; } B { y: 2; }`.
#[derive(Debug)]
pub struct LineScanner<'a> {
    lines: Vec<&'a str>,
    line: usize,
    column: usize,
}

impl<'a> LineScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n').collect(),
            line: 0,
            column: 0,
        }
    }

    /// The unconsumed remainder of the current line.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.line).map(|line| &line[self.column..])
    }

    /// Moves to the start of the next line.
    pub fn advance(&mut self) {
        if self.line < self.lines.len() {
            self.line += 1;
            self.column = 0;
        }
    }

    /// Consumes `len` bytes of the current line.
    pub fn consume(&mut self, len: usize) {
        if let Some(line) = self.lines.get(self.line) {
            self.column = (self.column + len).min(line.len());
        }
    }

    /// 0-based index of the current line; equals the number of lines at the end.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Skips whitespace, moving across lines, until there is something to read.
    ///
    /// Returns `false` when the input is exhausted.
    pub fn skip_blank(&mut self) -> bool {
        while let Some(rest) = self.peek() {
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                self.advance();
            } else {
                self.consume(rest.len() - trimmed.len());
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_leaves_remainder() {
        let mut scanner = LineScanner::new("A { x: 1; } B {");
        scanner.consume(12);
        assert_eq!(scanner.peek(), Some("B {"));
        scanner.advance();
        assert_eq!(scanner.peek(), None);
    }

    #[test]
    fn skip_blank_crosses_lines() {
        let mut scanner = LineScanner::new("\n   \n  A {");
        assert!(scanner.skip_blank());
        assert_eq!(scanner.line(), 2);
        assert_eq!(scanner.peek(), Some("A {"));
    }

    #[test]
    fn skip_blank_reports_exhaustion() {
        let mut scanner = LineScanner::new("  \n\t");
        assert!(!scanner.skip_blank());
        assert_eq!(scanner.line(), 2);
    }
}
