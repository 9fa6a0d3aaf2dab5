//! Input tokenization.
//!
//! Splits raw player input into words. Double quotes group words that contain
//! spaces, and a backslash makes the next character literal. Every token keeps
//! the byte span it came from so the parser can slice the raw text around it.

/// A word from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputToken {
    /// The word with quotes and escapes removed. Case is preserved.
    pub text: String,
    /// Byte offset of the first character of the word in the input.
    pub start: usize,
    /// Byte offset one past the last character of the word in the input.
    pub end: usize,
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// Never fails: an unterminated quote runs to the end of the input and a
    /// trailing backslash is dropped.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices();
        let mut current = String::new();
        let mut start: Option<usize> = None;
        let mut in_quotes = false;

        while let Some((i, ch)) = chars.next() {
            match ch {
                '\\' => {
                    start.get_or_insert(i);
                    if let Some((_, next)) = chars.next() {
                        current.push(next);
                    }
                }
                '"' => {
                    start.get_or_insert(i);
                    in_quotes = !in_quotes;
                }
                c if c.is_whitespace() && !in_quotes => {
                    if let Some(s) = start.take() {
                        tokens.push(InputToken {
                            text: std::mem::take(&mut current),
                            start: s,
                            end: i,
                        });
                    }
                }
                c => {
                    start.get_or_insert(i);
                    current.push(c);
                }
            }
        }

        // Flush final word
        if let Some(s) = start {
            tokens.push(InputToken {
                text: current,
                start: s,
                end: input.len(),
            });
        }

        tokens
    }

    /// Tokenizes and returns only the word texts.
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        Self::tokenize(input).into_iter().map(|t| t.text).collect()
    }
}
