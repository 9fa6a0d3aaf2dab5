//! Entity identifiers and the capability view of world entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Identifier of an addressable object in the shared world.
///
/// Rendered as `#N`, which is also its literal form inside generated world
/// code. The id says nothing about whether the entity still exists; only the
/// world gateway can answer that.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Creates a new entity ID with the given number.
    #[must_use]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// Returns the numeric part of the id.
    #[must_use]
    pub const fn number(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId(#{})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| Error::new(ErrorKind::InvalidEntityId(s.to_string())))
    }
}

/// The capability flags of an entity that the dispatch core consumes.
///
/// This is a snapshot handed out by the world gateway. The core never looks
/// at anything else about an entity; `location` is a weak reference that has
/// to be looked up again through the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The entity's identifier.
    pub id: EntityId,
    /// Privilege flag: may evaluate code and sees full error detail.
    pub programmer: bool,
    /// Where the entity currently is, if anywhere.
    pub location: Option<EntityId>,
    /// Whether the entity handles verbs nobody else matched.
    pub verb_missing: bool,
}

impl Entity {
    /// Creates an unprivileged entity with no location.
    #[must_use]
    pub const fn new(id: EntityId) -> Self {
        Self {
            id,
            programmer: false,
            location: None,
            verb_missing: false,
        }
    }

    /// Builder method to set the programmer flag.
    #[must_use]
    pub const fn with_programmer(mut self, programmer: bool) -> Self {
        self.programmer = programmer;
        self
    }

    /// Builder method to set the location.
    #[must_use]
    pub const fn with_location(mut self, location: EntityId) -> Self {
        self.location = Some(location);
        self
    }

    /// Builder method to set the missing-verb capability.
    #[must_use]
    pub const fn with_verb_missing(mut self, verb_missing: bool) -> Self {
        self.verb_missing = verb_missing;
        self
    }
}
