//! Structural brace counting for a single source line.
//!
//! Braces inside string literals, character literals, `\\` multiline string
//! lines and `//` comments are not structural and are ignored.

/// Structural summary of one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineShape {
    pub opens: u32,
    pub closes: u32,
    /// Last code character (outside literals and comments) is `;`
    pub ends_statement: bool,
}

impl LineShape {
    /// Net change in nesting depth caused by this line.
    pub fn delta(&self) -> i32 {
        self.opens as i32 - self.closes as i32
    }

    pub fn of(line: &str) -> Self {
        let mut shape = LineShape::default();
        let mut last_code: Option<char> = None;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' | '\'' => {
                    skip_literal(&mut chars, c);
                    last_code = Some(c);
                }
                '/' if chars.peek() == Some(&'/') => break,
                '\\' if chars.peek() == Some(&'\\') => {
                    // multiline string literal runs to end of line
                    last_code = Some('\\');
                    break;
                }
                '{' => {
                    shape.opens += 1;
                    last_code = Some(c);
                }
                '}' => {
                    shape.closes += 1;
                    last_code = Some(c);
                }
                c if c.is_whitespace() => {}
                c => last_code = Some(c),
            }
        }

        shape.ends_statement = last_code == Some(';');
        shape
    }
}

/// Consume characters up to and including the closing `quote`, honoring escapes.
fn skip_literal<I: Iterator<Item = char>>(chars: &mut I, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}
