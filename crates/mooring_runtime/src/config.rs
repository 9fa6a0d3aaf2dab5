//! Configuration for player sessions.

use std::env;

/// Environment variable that turns ANSI styling off (`0`, `false`, `off`, `no`).
pub const COLOR_VAR: &str = "MOORING_COLOR";

/// Environment variable holding the eval display depth.
pub const EVAL_DEPTH_VAR: &str = "MOORING_EVAL_DEPTH";

/// Configuration for a [`PlayerSession`](crate::PlayerSession).
///
/// Controls output styling and the fixed messages a session emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Whether output is styled with ANSI escapes.
    pub color: bool,

    /// Depth budget used when displaying eval results.
    pub eval_depth: usize,

    /// Message emitted on quit.
    pub farewell: String,

    /// Message emitted when no verb matched.
    pub not_understood: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            color: true,
            eval_depth: 1,
            farewell: "Bye!".to_string(),
            not_understood: "I didn't understand that.".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration without ANSI styling.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Reads overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`. Unparseable values are ignored.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(color) = lookup(COLOR_VAR) {
            let color = color.trim().to_ascii_lowercase();
            config.color = !matches!(color.as_str(), "0" | "false" | "off" | "no");
        }
        if let Some(depth) = lookup(EVAL_DEPTH_VAR).and_then(|d| d.trim().parse().ok()) {
            config.eval_depth = depth;
        }
        config
    }

    /// Builder method to enable/disable ANSI styling.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set the eval display depth.
    #[must_use]
    pub fn with_eval_depth(mut self, depth: usize) -> Self {
        self.eval_depth = depth;
        self
    }

    /// Builder method to set the quit message.
    #[must_use]
    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = farewell.into();
        self
    }

    /// Builder method to set the no-match message.
    #[must_use]
    pub fn with_not_understood(mut self, message: impl Into<String>) -> Self {
        self.not_understood = message.into();
        self
    }
}
