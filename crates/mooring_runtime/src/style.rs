//! ANSI styling of session output.

const RESET: &str = "\x1b[0m";
const BG_RED: &str = "\x1b[41m";
const GRAY: &str = "\x1b[90m";

/// Applies severity styles, or passes text through when color is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    /// Creates a styler.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Returns true if styles are applied.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        self.color
    }

    /// Error severity: red background.
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(BG_RED, text)
    }

    /// De-emphasized notices: gray.
    #[must_use]
    pub fn muted(self, text: &str) -> String {
        self.paint(GRAY, text)
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
