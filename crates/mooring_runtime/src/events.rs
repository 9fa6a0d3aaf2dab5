//! Notifications a session sends up to its transport.

use std::fmt;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Opaque identity of a connected user.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fire-and-forget notification from a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum SessionEvent {
    /// Text for the player's screen.
    Output(String),
    /// Return the connection to the unauthenticated prompt.
    SetPrompt(UserId),
}

/// Receives session events. Delivery is not acknowledged.
pub trait EventSink: Send {
    /// Delivers one event.
    fn emit(&self, event: SessionEvent);
}

impl EventSink for Sender<SessionEvent> {
    fn emit(&self, event: SessionEvent) {
        // A closed receiver means the transport is gone.
        let _ = self.send(event);
    }
}

/// Collects events in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    #[must_use]
    pub fn drain(&self) -> Vec<SessionEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// A copy of everything recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SessionEvent> {
        self.lock().clone()
    }

    /// Just the output lines recorded so far.
    #[must_use]
    pub fn outputs(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Output(text) => Some(text.clone()),
                SessionEvent::SetPrompt(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SessionEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: SessionEvent) {
        self.lock().push(event);
    }
}
