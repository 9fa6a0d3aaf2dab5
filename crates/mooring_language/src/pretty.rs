//! Display of values returned by world code.
//!
//! Output is a single line. Nested containers below the depth budget are
//! shown as `[List]` or `[Object]` instead of being expanded, so a huge
//! structure returned from an eval cannot flood the player's screen.
//!
//! # Example
//!
//! ```
//! use mooring_foundation::Value;
//! use mooring_language::pretty::format_value;
//!
//! let inner: Value = vec![1, 2].into_iter().collect();
//! let outer: Value = vec![Value::Int(0), inner].into_iter().collect();
//! assert_eq!(format_value(&outer, 1), "[0, [1, 2]]");
//! assert_eq!(format_value(&outer, 0), "[0, [List]]");
//! ```

use std::fmt::Write;

use mooring_foundation::Value;

use crate::literal::escape;

/// Configuration for value display.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// How many container levels below the top one are expanded.
    pub depth: usize,
    /// Maximum elements shown per container before eliding the rest.
    pub max_items: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            max_items: 100,
        }
    }
}

/// Formats a value with the given depth budget.
#[must_use]
pub fn format_value(value: &Value, depth: usize) -> String {
    format_value_with_config(
        value,
        &DisplayConfig {
            depth,
            ..DisplayConfig::default()
        },
    )
}

/// Formats a value with custom configuration.
#[must_use]
pub fn format_value_with_config(value: &Value, config: &DisplayConfig) -> String {
    let mut printer = ValuePrinter {
        config,
        output: String::new(),
    };
    printer.print(value, config.depth);
    printer.output
}

/// Printer state.
struct ValuePrinter<'a> {
    config: &'a DisplayConfig,
    output: String,
}

impl ValuePrinter<'_> {
    fn print(&mut self, value: &Value, budget: usize) {
        match value {
            Value::Nil => self.output.push_str("nil"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Int(n) => self.output.push_str(&n.to_string()),
            Value::Float(n) => self.print_float(*n),
            Value::String(s) => self.output.push_str(&escape(s)),
            Value::Entity(id) => self.output.push_str(&id.to_string()),
            Value::List(items) => {
                self.output.push('[');
                let len = items.len();
                for (i, item) in items.iter().take(self.config.max_items).enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_child(item, budget);
                }
                self.print_elided(len);
                self.output.push(']');
            }
            Value::Object(entries) => {
                if entries.is_empty() {
                    self.output.push_str("{}");
                    return;
                }
                self.output.push_str("{ ");
                let len = entries.len();
                for (i, (key, item)) in entries.iter().take(self.config.max_items).enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.print_key(key);
                    self.output.push_str(": ");
                    self.print_child(item, budget);
                }
                self.print_elided(len);
                self.output.push_str(" }");
            }
        }
    }

    fn print_child(&mut self, value: &Value, budget: usize) {
        match (value, budget) {
            (Value::List(_), 0) => self.output.push_str("[List]"),
            (Value::Object(_), 0) => self.output.push_str("[Object]"),
            (_, budget) => self.print(value, budget.saturating_sub(1)),
        }
    }

    fn print_key(&mut self, key: &str) {
        let bare = !key.is_empty()
            && !key.starts_with(|c: char| c.is_ascii_digit())
            && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if bare {
            self.output.push_str(key);
        } else {
            self.output.push_str(&escape(key));
        }
    }

    fn print_elided(&mut self, len: usize) {
        if len > self.config.max_items {
            let more = len - self.config.max_items;
            let noun = if more == 1 { "item" } else { "items" };
            let _ = write!(self.output, ", ... {more} more {noun}");
        }
    }

    fn print_float(&mut self, n: f64) {
        // Ensure we print floats with decimal point
        let s = n.to_string();
        self.output.push_str(&s);
        if n.is_finite() && !s.contains('.') && !s.contains('e') && !s.contains('E') {
            self.output.push_str(".0");
        }
    }
}
