//! World-script dialect for Mooring.
//!
//! The dispatch core never executes world code itself. It generates small
//! fragments of the world's scripting dialect and hands them to the world
//! gateway together with an execution label. This crate owns that dialect:
//!
//! - [`literal`] - Quoted string literals that survive the trip to the world
//! - [`invocation`] - Verb invocation fragments and their `Verb::` labels
//! - [`rewrite`] - Turning a programmer's eval snippet into a runnable unit
//! - [`pretty`] - Depth-limited display of values returned by world code
//!
//! # Example
//!
//! ```
//! use mooring_foundation::EntityId;
//! use mooring_language::invocation::{ObjectArg, VerbCall};
//! use mooring_parser::Command;
//!
//! let call = VerbCall {
//!     owner: EntityId::new(12),
//!     verb: "look".to_string(),
//!     player: EntityId::new(7),
//!     dobj: ObjectArg::Void,
//!     iobj: ObjectArg::Void,
//!     command: Command::new("look"),
//! };
//! assert_eq!(call.label(), "Verb::#12.look");
//! assert!(call.to_code().starts_with("#12[\"look\"](#7, void 0, void 0, \"look\""));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod invocation;
pub mod literal;
pub mod pretty;
pub mod rewrite;

pub use invocation::{ObjectArg, VerbCall};
pub use literal::escape;
pub use pretty::{DisplayConfig, format_value};
pub use rewrite::{eval_label, rewrite_eval};
