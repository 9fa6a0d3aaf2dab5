//! Mooring - Per-player command dispatch for shared, persistent text worlds
//!
//! This crate re-exports all layers of the Mooring system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: mooring_runtime    — Player sessions, gateways, in-memory world, REPL
//! Layer 2: mooring_language   — World-script literals, verb calls, eval rewrite, display
//! Layer 1: mooring_parser     — Tokenizer, vocabulary, commands, resolution contract
//! Layer 0: mooring_foundation — Core types (Value, EntityId, Entity, Error)
//! ```

pub use mooring_foundation as foundation;
pub use mooring_language as language;
pub use mooring_parser as parser;
pub use mooring_runtime as runtime;
