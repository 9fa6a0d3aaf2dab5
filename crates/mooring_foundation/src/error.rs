//! Error types for Mooring.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::entity::EntityId;

/// The main error type for Mooring operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates an error raised by world code running under `label`.
    #[must_use]
    pub fn script(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Script {
            label: label.into(),
            message: message.into(),
        })
    }

    /// Creates an error raised by a hook.
    #[must_use]
    pub fn hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hook {
            hook: hook.into(),
            message: message.into(),
        })
    }

    /// Creates a resolution error.
    #[must_use]
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Resolution(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Full diagnostic text: the message followed by location and frames.
    ///
    /// This is what privileged players are shown when something fails.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let head = format!("{}: {}", self.kind.name(), self.kind);
        match &self.context {
            Some(ctx) if !ctx.is_empty() => format!("{head}\n{ctx}"),
            _ => head,
        }
    }

    /// Serializable snapshot of this error for structured logs.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            name: self.kind.name(),
            message: self.kind.to_string(),
            source: self.context.as_ref().and_then(|c| c.source.clone()),
            stack: self
                .context
                .as_ref()
                .map(|c| c.stack.clone())
                .unwrap_or_default(),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Entity id no longer exists in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityId),

    /// Text that was expected to be an entity id is not one.
    #[error("invalid entity id: {0:?}")]
    InvalidEntityId(String),

    /// World code raised while running under an execution label.
    #[error("{message} (in {label})")]
    Script {
        /// The execution label the code ran under.
        label: String,
        /// The error message raised by the code.
        message: String,
    },

    /// A hook failed internally.
    #[error("hook {hook} failed: {message}")]
    Hook {
        /// Name of the hook.
        hook: String,
        /// The error message raised by the hook.
        message: String,
    },

    /// Object or verb matching hit an inconsistency.
    #[error("resolution failed: {0}")]
    Resolution(String),

    /// A literal or code fragment could not be decoded.
    #[error("malformed literal: {0}")]
    Literal(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Stable name of the kind, used as the `name` of serialized reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "EntityNotFound",
            Self::InvalidEntityId(_) => "InvalidEntityId",
            Self::Script { .. } => "ScriptError",
            Self::Hook { .. } => "HookError",
            Self::Resolution(_) => "ResolutionError",
            Self::Literal(_) => "LiteralError",
            Self::Internal(_) => "InternalError",
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Execution label or file the error came from.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Stack trace of verb/function calls, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }

    /// Returns true if the context carries nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.stack.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "    at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        for (i, frame) in self.stack.iter().enumerate() {
            if i > 0 || self.source.is_some() {
                writeln!(f)?;
            }
            write!(f, "    in {frame}")?;
        }
        Ok(())
    }
}

/// A serializable view of an [`Error`], logged by the failure boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Kind name, e.g. `ScriptError`.
    pub name: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Execution label or file, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Call frames, innermost first.
    pub stack: Vec<String>,
}
