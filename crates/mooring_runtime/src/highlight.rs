//! Input highlighting for the REPL.

use std::borrow::Cow;

use mooring_parser::Vocabulary;

/// Highlighter for typed commands.
///
/// The verb is bold, a leading shortcut character magenta, quoted text
/// yellow, and `#N` entity literals cyan.
pub struct CommandHighlighter {
    vocabulary: Vocabulary,
}

impl CommandHighlighter {
    /// Creates a highlighter that knows `vocabulary`'s shortcuts.
    #[must_use]
    pub const fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);

        let leading = line.trim_start();
        let indent = line.len() - leading.len();
        result.push_str(&line[..indent]);

        // Leading shortcut
        let mut first = leading.chars();
        if let Some(c) = first.next().filter(|c| self.vocabulary.shortcut(*c).is_some()) {
            result.push_str("\x1b[35m"); // magenta
            result.push(c);
            result.push_str("\x1b[0m");
            // Code after a shortcut is left alone.
            result.push_str(first.as_str());
            return Cow::Owned(result);
        }

        // Verb
        let verb_len = leading.find(char::is_whitespace).unwrap_or(leading.len());
        result.push_str("\x1b[1m"); // bold
        result.push_str(&leading[..verb_len]);
        result.push_str("\x1b[0m");

        let mut chars = line[indent + verb_len..].chars().peekable();
        let mut in_string = false;
        while let Some(c) = chars.next() {
            match c {
                '"' => {
                    if in_string {
                        result.push(c);
                        result.push_str("\x1b[0m");
                        in_string = false;
                    } else {
                        result.push_str("\x1b[33m"); // yellow
                        result.push(c);
                        in_string = true;
                    }
                }

                // Escape in string
                '\\' if in_string => {
                    result.push(c);
                    if let Some(next) = chars.next() {
                        result.push(next);
                    }
                }

                // Entity literals
                '#' if !in_string && chars.peek().is_some_and(char::is_ascii_digit) => {
                    result.push_str("\x1b[36m"); // cyan
                    result.push(c);
                    while let Some(&d) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        result.push(d);
                        chars.next();
                    }
                    result.push_str("\x1b[0m");
                }

                _ => result.push(c),
            }
        }

        if in_string {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}
