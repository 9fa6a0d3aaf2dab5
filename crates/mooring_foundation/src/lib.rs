//! Core types, values, and errors for Mooring.
//!
//! This crate provides:
//! - [`EntityId`] - Textual `#N` identifiers for world entities
//! - [`Entity`] - The capability view of an entity that the dispatch core reads
//! - [`Value`] - Values returned by world code and passed to hooks
//! - [`Error`] - Rich error types with context and a serializable report
//! - Persistent collections ([`MrVec`], [`MrMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod entity;
pub mod error;
pub mod value;

pub use collections::{MrMap, MrVec};
pub use entity::{Entity, EntityId};
pub use error::{Error, ErrorContext, ErrorKind, ErrorReport};
pub use value::Value;

/// Result type alias using Mooring's Error type.
pub type Result<T> = std::result::Result<T, Error>;
