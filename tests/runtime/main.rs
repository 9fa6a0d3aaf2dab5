//! Integration tests for Layer 3: Runtime
//!
//! Drives `PlayerSession` against recording collaborators and against the
//! in-memory world.

mod disclosure;
mod dispatch;
mod support;
