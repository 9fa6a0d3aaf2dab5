//! The two call surfaces the dispatch core uses to reach the shared world.
//!
//! A [`HookGateway`] runs named extension points; a [`WorldGateway`] looks up
//! entities and executes generated code. Both are implemented outside the
//! core and may be shared across every session.

use std::fmt;
use std::sync::Arc;

use mooring_foundation::{Entity, EntityId, Result, Value};
use mooring_parser::Resolver;

/// Where a hook is looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookScope {
    /// Cross-cutting hooks such as input preprocessing.
    System,
    /// Hooks attached to one entity.
    Entity(EntityId),
}

impl fmt::Display for HookScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::Entity(id) => write!(f, "{id}"),
        }
    }
}

/// The result of asking for a hook to run.
#[derive(Clone, Debug, PartialEq)]
pub struct HookOutcome {
    /// Whether a hook was registered and ran.
    pub ran: bool,
    /// The hook's return value, or a placeholder when it did not run.
    pub value: Value,
}

impl HookOutcome {
    /// A hook ran and returned `value`.
    #[must_use]
    pub const fn ran(value: Value) -> Self {
        Self { ran: true, value }
    }

    /// No hook was registered; `value` is the un-run placeholder.
    #[must_use]
    pub const fn not_ran(value: Value) -> Self {
        Self { ran: false, value }
    }

    /// The value if the hook actually ran.
    #[must_use]
    pub fn into_ran_value(self) -> Option<Value> {
        self.ran.then_some(self.value)
    }
}

/// Runs named extension points.
///
/// An unregistered hook is not an error: the gateway answers with
/// `ran == false`. A hook that fails internally returns `Err`.
pub trait HookGateway: Send + Sync {
    /// Runs hook `name` in `scope` with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a registered hook fails.
    fn run_hook(&self, scope: HookScope, name: &str, args: &[Value]) -> Result<HookOutcome>;

    /// Runs a hook whose failure must not affect the caller.
    ///
    /// Failures are logged at `warn` and reported as a hook that did not run.
    fn run_hook_best_effort(&self, scope: HookScope, name: &str, args: &[Value]) -> HookOutcome {
        match self.run_hook(scope, name, args) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(%scope, hook = name, err = %err, "hook failed");
                HookOutcome::not_ran(Value::Nil)
            }
        }
    }

    /// Runs a hook whose failure the caller handles.
    ///
    /// # Errors
    ///
    /// Returns an error if the hook fails.
    fn run_hook_or_fail(&self, scope: HookScope, name: &str, args: &[Value]) -> Result<HookOutcome> {
        self.run_hook(scope, name, args)
    }
}

/// Looks up entities and executes generated code in the shared environment.
pub trait WorldGateway: Send + Sync {
    /// Resolves an id to a snapshot of a live entity.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the id no longer exists.
    fn get(&self, id: EntityId) -> Result<Entity>;

    /// Executes `code` under the attribution `label`.
    ///
    /// # Errors
    ///
    /// Returns an error if the code raises.
    fn run(&self, code: &str, label: &str) -> Result<Value>;
}

/// The collaborators a session dispatches through.
#[derive(Clone)]
pub struct Gateways {
    /// Entity lookup and code execution.
    pub world: Arc<dyn WorldGateway>,
    /// Extension points.
    pub hooks: Arc<dyn HookGateway>,
    /// Object and verb matching.
    pub resolver: Arc<dyn Resolver>,
}

impl Gateways {
    /// Bundles three separate collaborators.
    #[must_use]
    pub fn new(
        world: Arc<dyn WorldGateway>,
        hooks: Arc<dyn HookGateway>,
        resolver: Arc<dyn Resolver>,
    ) -> Self {
        Self {
            world,
            hooks,
            resolver,
        }
    }

    /// Uses one object for all three roles.
    #[must_use]
    pub fn shared<T>(world: Arc<T>) -> Self
    where
        T: WorldGateway + HookGateway + Resolver + 'static,
    {
        Self {
            world: world.clone(),
            hooks: world.clone(),
            resolver: world,
        }
    }
}

impl fmt::Debug for Gateways {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateways").finish_non_exhaustive()
    }
}
