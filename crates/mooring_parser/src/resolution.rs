//! Object and verb resolution.
//!
//! Matching words to world entities and choosing a verb is the world's job.
//! This module holds the data that crosses that boundary and the
//! [`Resolver`] trait the world implements.

use mooring_foundation::{Entity, EntityId, Result};

use crate::command::Command;

/// Entities bound to the semantic roles of a command.
///
/// Each side is independently present or absent. Absence is never encoded as
/// a special id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The direct object, if one was matched.
    pub dobj: Option<EntityId>,
    /// The indirect object, if one was matched.
    pub iobj: Option<EntityId>,
}

impl ResolutionResult {
    /// A result with neither object matched.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            dobj: None,
            iobj: None,
        }
    }

    /// Builder method to set the direct object.
    #[must_use]
    pub const fn with_dobj(mut self, dobj: EntityId) -> Self {
        self.dobj = Some(dobj);
        self
    }

    /// Builder method to set the indirect object.
    #[must_use]
    pub const fn with_iobj(mut self, iobj: EntityId) -> Self {
        self.iobj = Some(iobj);
        self
    }
}

/// Where a verb binding came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerbSource {
    /// The resolver matched a real verb.
    Matched,
    /// Nothing matched and the location handles missing verbs.
    Fallback,
}

/// A selected executable target bound to its owning entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbBinding {
    /// The entity the verb is invoked on.
    pub owner: EntityId,
    /// The verb name.
    pub verb: String,
    /// Whether the binding was matched or synthesized.
    pub source: VerbSource,
}

impl VerbBinding {
    /// Name of the verb locations define to catch unmatched commands.
    pub const VERB_MISSING: &'static str = "verbMissing";

    /// A binding to a verb the resolver matched.
    #[must_use]
    pub fn matched(owner: EntityId, verb: impl Into<String>) -> Self {
        Self {
            owner,
            verb: verb.into(),
            source: VerbSource::Matched,
        }
    }

    /// The synthetic binding to `owner`'s missing-verb handler.
    #[must_use]
    pub fn verb_missing(owner: EntityId) -> Self {
        Self {
            owner,
            verb: Self::VERB_MISSING.to_string(),
            source: VerbSource::Fallback,
        }
    }

    /// Returns true if this binding was synthesized as a fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == VerbSource::Fallback
    }
}

/// Matches commands against the world on behalf of an acting entity.
///
/// Either operation may fail on internal inconsistency; callers treat that
/// as an execution failure.
pub trait Resolver: Send + Sync {
    /// Binds the command's object strings to entities visible to `actor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the world is inconsistent.
    fn match_objects(&self, actor: &Entity, command: &Command) -> Result<ResolutionResult>;

    /// Picks the verb to run, or `None` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the world is inconsistent.
    fn match_verb(
        &self,
        actor: &Entity,
        command: &Command,
        objects: &ResolutionResult,
    ) -> Result<Option<VerbBinding>>;
}
