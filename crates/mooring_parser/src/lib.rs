//! Command parsing for shared text worlds.
//!
//! This crate turns a line of player input like `put lamp in box` into an
//! immutable [`Command`], and defines the data and the [`Resolver`] contract
//! used to bind that command to world entities and a verb.
//!
//! # Architecture
//!
//! ```text
//! "put lamp in box"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["put", "lamp", "in", "box"] (with byte spans)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → shortcut expansion, preposition lookup
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → { verb: "put", dobjstr: "lamp", prepstr: "in", iobjstr: "box" }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RESOLUTION      │  → dobj/iobj entities and a verb binding (world side)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to words with spans
//! - [`vocabulary`] - Prepositions and leading-character shortcuts
//! - [`command`] - The parsed command
//! - [`parser`] - Input to command
//! - [`resolution`] - Resolution results, verb bindings, and the resolver contract

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod resolution;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::Command;
pub use parser::{CommandParser, parse};
pub use resolution::{ResolutionResult, Resolver, VerbBinding, VerbSource};
pub use vocabulary::Vocabulary;
