//! Per-player session dispatch for Mooring.
//!
//! This crate provides:
//! - [`PlayerSession`] - The per-connection dispatch pipeline
//! - [`HookGateway`] / [`WorldGateway`] - Contracts for reaching the world
//! - [`SessionRegistry`] - The shared table of live sessions
//! - [`MemoryWorld`] - An in-process world implementing every contract
//! - [`Repl`] - A console transport, used by the `mooring` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod boundary;
pub mod config;
pub mod demo;
pub mod dispatch;
pub mod editor;
pub mod events;
pub mod gateway;
pub mod highlight;
pub mod logging;
pub mod memory;
pub mod registry;
pub mod repl;
pub mod session;
pub mod style;

pub use boundary::{FailureSite, INTERNAL_ERROR_NOTICE, disclose};
pub use config::SessionConfig;
pub use demo::{DemoWorld, demo_world};
pub use dispatch::Disposition;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use events::{EventLog, EventSink, SessionEvent, UserId};
pub use gateway::{Gateways, HookGateway, HookOutcome, HookScope, WorldGateway};
pub use logging::init_tracing;
pub use memory::{MemoryWorld, ObjSpec, PrepSpec, VerbDef, VerbInvocation};
pub use registry::SessionRegistry;
pub use repl::Repl;
pub use session::{PlayerSession, TabDirection};
pub use style::Styler;
