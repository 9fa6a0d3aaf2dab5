//! Choosing a dispatch path for a parsed command.

use mooring_foundation::Entity;
use mooring_parser::Command;

/// Verb that evaluates code for programmers.
pub const EVAL_VERB: &str = "eval";

/// Verb that ends the session.
pub const QUIT_VERB: &str = "quit";

/// The path a command takes, decided once after parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// Run the argument text as code.
    Eval,
    /// End the session.
    Quit,
    /// Match objects and a verb in the world.
    Resolve,
}

impl Disposition {
    /// Classifies `command` typed by `player`.
    ///
    /// `eval` is only special for programmers. Anyone else falls through to
    /// ordinary resolution.
    #[must_use]
    pub fn classify(command: &Command, player: &Entity) -> Self {
        match command.verb.as_str() {
            EVAL_VERB if player.programmer => Self::Eval,
            QUIT_VERB => Self::Quit,
            _ => Self::Resolve,
        }
    }
}
