//! Rewriting eval snippets into self-contained units.
//!
//! A programmer types free-standing statements such as
//!
//! ```text
//! let n = player.name; n.length
//! ```
//!
//! and expects the value of the last expression back. The rewrite splits the
//! snippet into top-level statements, turns a trailing expression into a
//! `return`, and wraps everything in a function that binds `player` to the
//! invoking entity:
//!
//! ```text
//! (function (player) {
//!   let n = player.name;
//!   return (n.length);
//! })(#7)
//! ```

use mooring_foundation::EntityId;

/// Leading words that mark a statement rather than an expression.
const STATEMENT_KEYWORDS: &[&str] = &[
    "let", "const", "var", "if", "for", "while", "do", "return", "function", "class", "throw",
    "try", "switch", "break", "continue",
];

/// Execution label for an eval run by `player`.
#[must_use]
pub fn eval_label(player: EntityId) -> String {
    format!("Eval::{player}")
}

/// Rewrites `source` into a unit that returns its trailing expression's value
/// and sees the invoking entity as `player`.
#[must_use]
pub fn rewrite_eval(source: &str, player: EntityId) -> String {
    let mut statements = split_statements(source);

    let mut body = String::new();
    let last = statements.pop();
    for stmt in &statements {
        body.push_str("  ");
        body.push_str(stmt);
        body.push_str(";\n");
    }
    if let Some(last) = last {
        if is_expression(&last) {
            body.push_str("  return (");
            body.push_str(&last);
            body.push_str(");\n");
        } else {
            body.push_str("  ");
            body.push_str(&last);
            body.push_str(";\n");
        }
    }

    format!("(function (player) {{\n{body}}})({player})")
}

/// Splits `source` on top-level semicolons.
///
/// Semicolons inside string literals, template literals, brackets, or
/// comments do not split. Comments are dropped and blank statements removed.
fn split_statements(source: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' | '`' => {
                current.push(c);
                let mut escaped = false;
                for inner in chars.by_ref() {
                    current.push(inner);
                    if escaped {
                        escaped = false;
                    } else if inner == '\\' {
                        escaped = true;
                    } else if inner == c {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                // Line comment runs to end of line; keep the newline.
                for inner in chars.by_ref() {
                    if inner == '\n' {
                        current.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                current.push(' ');
            }
            '(' | '[' | '{' => {
                depth += 1;
                current.push(c);
            }
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ';' if depth == 0 => {
                statements.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    statements.push(current);

    statements
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns true if `stmt` can stand as the operand of `return`.
fn is_expression(stmt: &str) -> bool {
    if stmt.starts_with('{') {
        return false;
    }
    let first_word: String = stmt
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    !STATEMENT_KEYWORDS.contains(&first_word.as_str())
}
