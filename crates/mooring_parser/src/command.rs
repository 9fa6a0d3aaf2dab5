//! The parsed command.

/// Immutable parsed representation of one input line.
///
/// An empty `verb` is valid: it means no verb was recognized, and resolution
/// must cope with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    /// The first word of the input.
    pub verb: String,
    /// Everything after the verb, as typed.
    pub argstr: String,
    /// Words before the preposition (or all words when there is none).
    pub dobjstr: String,
    /// The preposition phrase, if any.
    pub prepstr: String,
    /// Words after the preposition.
    pub iobjstr: String,
}

impl Command {
    /// Creates a command with only a verb.
    #[must_use]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            ..Self::default()
        }
    }

    /// Returns true if no verb was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }

    /// The five string fields in invocation order.
    #[must_use]
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.verb,
            &self.argstr,
            &self.dobjstr,
            &self.prepstr,
            &self.iobjstr,
        ]
    }
}
