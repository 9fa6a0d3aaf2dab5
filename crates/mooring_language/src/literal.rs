//! String literals for generated world code.
//!
//! [`escape`] produces a double-quoted literal that can be embedded anywhere
//! in a generated fragment. The encoding is JSON-compatible, so the world side
//! (and [`decode`]) reconstructs the original string byte for byte.

use std::fmt::Write;

use mooring_foundation::{Error, ErrorKind, Result};

/// Quotes `text` as a string literal of the world-script dialect.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                // Control characters all live in the BMP.
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Decodes a literal produced by [`escape`] back into the original string.
///
/// # Errors
///
/// Returns an error if `literal` is not a well-formed quoted string.
pub fn decode(literal: &str) -> Result<String> {
    serde_json::from_str::<String>(literal)
        .map_err(|e| Error::new(ErrorKind::Literal(format!("{literal}: {e}"))))
}

/// Returns the byte length of the literal at the start of `text`, if one is
/// there. Used when scanning fragments that embed several literals.
#[must_use]
pub fn literal_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    if !matches!(chars.next(), Some((_, '"'))) {
        return None;
    }
    let mut escaped = false;
    for (i, c) in chars {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}
