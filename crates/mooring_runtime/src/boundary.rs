//! Disclosure policy for failures in world code.
//!
//! Every path that can run world code ends in the same boundary: the error is
//! always logged, and the player sees either the full diagnostic (programmers)
//! or [`INTERNAL_ERROR_NOTICE`] (everyone else). Nothing is re-raised.

use mooring_foundation::Error;

/// The only text a non-programmer ever sees for a failure.
pub const INTERNAL_ERROR_NOTICE: &str = "An internal error occurred.";

/// Which failure-bounded step an error came from. Used as the log message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureSite {
    /// Loading the active player before dispatch.
    LoadPlayer,
    /// Running the preprocessing hook.
    Preprocess,
    /// Object or verb matching.
    Matching,
    /// Running a verb.
    RunVerb,
    /// Running eval code.
    Eval,
}

impl FailureSite {
    /// The log message for this site.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoadPlayer => "error loading player",
            Self::Preprocess => "error preprocessing input",
            Self::Matching => "error matching",
            Self::RunVerb => "error running verb",
            Self::Eval => "error running eval code",
        }
    }
}

/// The text shown to the player for `err`.
#[must_use]
pub fn disclose(err: &Error, privileged: bool) -> String {
    if privileged {
        err.diagnostic()
    } else {
        INTERNAL_ERROR_NOTICE.to_string()
    }
}

/// The serialized error attached to the warning log.
#[must_use]
pub fn serialize(err: &Error) -> String {
    serde_json::to_string(&err.report()).unwrap_or_else(|_| err.to_string())
}
