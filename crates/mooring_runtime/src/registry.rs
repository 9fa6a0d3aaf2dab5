//! The table of live sessions, keyed by the entity each one embodies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mooring_foundation::EntityId;

use crate::events::UserId;

/// Shared `player → user` table owned by the session manager.
///
/// Cloning yields another handle to the same table. Each session only ever
/// removes its own key.
#[derive(Clone, Debug, Default)]
pub struct SessionRegistry {
    entries: Arc<Mutex<HashMap<EntityId, UserId>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `user` is embodying `player`, returning any previous user.
    pub fn register(&self, player: EntityId, user: UserId) -> Option<UserId> {
        self.lock().insert(player, user)
    }

    /// Removes `player`'s entry. Removing an absent key is a no-op.
    pub fn remove(&self, player: EntityId) -> Option<UserId> {
        self.lock().remove(&player)
    }

    /// Returns true if a session is registered for `player`.
    #[must_use]
    pub fn contains(&self, player: EntityId) -> bool {
        self.lock().contains_key(&player)
    }

    /// The user embodying `player`, if any.
    #[must_use]
    pub fn user(&self, player: EntityId) -> Option<UserId> {
        self.lock().get(&player).cloned()
    }

    /// Number of registered sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no sessions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<EntityId, UserId>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
