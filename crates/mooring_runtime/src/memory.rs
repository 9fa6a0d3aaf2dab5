//! An in-process world.
//!
//! [`MemoryWorld`] implements all three collaborator contracts
//! ([`WorldGateway`], [`HookGateway`], [`Resolver`]) over a small object
//! graph. Verbs and hooks are native closures. Generated verb invocation
//! fragments are decoded and dispatched to those closures; any other code is
//! handed to an optional [`Evaluator`].
//!
//! It backs the `mooring` binary and the integration tests. A production
//! world would put a real scripting environment behind the same traits.
//!
//! # Matching
//!
//! Object strings are matched against the names and aliases of things in the
//! actor's inventory, then the actor's location. `me`, `here`, and `#N`
//! literals are understood. A name that matches more than one thing matches
//! nothing.
//!
//! Verbs are searched on the actor, the actor's location, the direct object,
//! then the indirect object. The first verb whose name and argument signature
//! fit wins.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mooring_foundation::{Entity, EntityId, Error, ErrorContext, Result, Value};
use mooring_language::VerbCall;
use mooring_parser::{Command, ResolutionResult, Resolver, VerbBinding};

use crate::gateway::{HookGateway, HookOutcome, HookScope, WorldGateway};

/// A native verb body.
pub type VerbHandler = Arc<dyn Fn(&MemoryWorld, &VerbInvocation) -> Result<Value> + Send + Sync>;

/// A native hook body.
pub type HookHandler = Arc<dyn Fn(&MemoryWorld, &[Value]) -> Result<Value> + Send + Sync>;

/// Runs code that is not a verb invocation, such as eval units.
pub type Evaluator = Arc<dyn Fn(&MemoryWorld, &str, &str) -> Result<Value> + Send + Sync>;

/// What a verb receives when it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbInvocation {
    /// The entity the verb is running on.
    pub this: EntityId,
    /// The verb name it was invoked as.
    pub verb: String,
    /// The invoking player.
    pub player: EntityId,
    /// The direct object, if resolved.
    pub dobj: Option<EntityId>,
    /// The indirect object, if resolved.
    pub iobj: Option<EntityId>,
    /// The command strings.
    pub command: Command,
}

impl From<VerbCall> for VerbInvocation {
    fn from(call: VerbCall) -> Self {
        Self {
            this: call.owner,
            verb: call.verb,
            player: call.player,
            dobj: call.dobj.into(),
            iobj: call.iobj.into(),
            command: call.command,
        }
    }
}

/// Constraint on one object role of a verb.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjSpec {
    /// Anything, including nothing.
    #[default]
    Any,
    /// The role's string must be empty.
    None,
    /// The role must resolve to the verb's owner.
    This,
}

impl ObjSpec {
    fn accepts(self, owner: EntityId, text: &str, resolved: Option<EntityId>) -> bool {
        match self {
            Self::Any => true,
            Self::None => text.is_empty(),
            Self::This => resolved == Some(owner),
        }
    }
}

/// Constraint on the preposition of a verb.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PrepSpec {
    /// Any preposition or none.
    #[default]
    Any,
    /// No preposition.
    None,
    /// Exactly this preposition phrase.
    Is(String),
}

impl PrepSpec {
    fn accepts(&self, prepstr: &str) -> bool {
        match self {
            Self::Any => true,
            Self::None => prepstr.is_empty(),
            Self::Is(prep) => prep == prepstr,
        }
    }
}

/// A native verb attached to an object.
#[derive(Clone)]
pub struct VerbDef {
    names: Vec<String>,
    dobj: ObjSpec,
    prep: PrepSpec,
    iobj: ObjSpec,
    handler: VerbHandler,
}

impl VerbDef {
    /// Creates a verb accepting any arguments.
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(&MemoryWorld, &VerbInvocation) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            names: vec![name.into()],
            dobj: ObjSpec::Any,
            prep: PrepSpec::Any,
            iobj: ObjSpec::Any,
            handler: Arc::new(handler),
        }
    }

    /// Builder method to add another name the verb answers to.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.names.push(alias.into());
        self
    }

    /// Builder method to set the argument signature.
    #[must_use]
    pub fn with_args(mut self, dobj: ObjSpec, prep: PrepSpec, iobj: ObjSpec) -> Self {
        self.dobj = dobj;
        self.prep = prep;
        self.iobj = iobj;
        self
    }

    /// The verb's primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    fn answers_to(&self, verb: &str) -> bool {
        self.names.iter().any(|n| n == verb)
    }

    fn accepts(&self, owner: EntityId, command: &Command, objects: &ResolutionResult) -> bool {
        self.dobj.accepts(owner, &command.dobjstr, objects.dobj)
            && self.prep.accepts(&command.prepstr)
            && self.iobj.accepts(owner, &command.iobjstr, objects.iobj)
    }
}

impl std::fmt::Debug for VerbDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbDef")
            .field("names", &self.names)
            .field("dobj", &self.dobj)
            .field("prep", &self.prep)
            .field("iobj", &self.iobj)
            .finish_non_exhaustive()
    }
}

/// One object in the world.
#[derive(Clone, Debug)]
struct WorldObject {
    name: String,
    aliases: Vec<String>,
    location: Option<EntityId>,
    programmer: bool,
    verbs: Vec<VerbDef>,
}

impl WorldObject {
    fn new(name: String) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            location: None,
            programmer: false,
            verbs: Vec::new(),
        }
    }

    fn is_called(&self, word: &str) -> bool {
        self.name.eq_ignore_ascii_case(word) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(word))
    }

    fn verb(&self, name: &str) -> Option<&VerbDef> {
        self.verbs.iter().find(|v| v.answers_to(name))
    }
}

#[derive(Default)]
struct WorldState {
    next_id: u64,
    objects: BTreeMap<EntityId, WorldObject>,
    hooks: HashMap<(HookScope, String), HookHandler>,
    evaluator: Option<Evaluator>,
    notifications: HashMap<EntityId, Vec<String>>,
}

impl WorldState {
    fn object(&self, id: EntityId) -> Result<&WorldObject> {
        self.objects.get(&id).ok_or_else(|| Error::entity_not_found(id))
    }

    fn object_mut(&mut self, id: EntityId) -> Result<&mut WorldObject> {
        self.objects.get_mut(&id).ok_or_else(|| Error::entity_not_found(id))
    }

    fn contents(&self, container: EntityId) -> impl Iterator<Item = (EntityId, &WorldObject)> {
        self.objects
            .iter()
            .filter(move |(_, o)| o.location == Some(container))
            .map(|(id, o)| (*id, o))
    }

    /// Binds an object string to an entity visible to `actor`.
    fn match_name(&self, actor: EntityId, text: &str) -> Result<Option<EntityId>> {
        let location = self.object(actor)?.location;
        let word = strip_article(text.trim());
        if word.is_empty() {
            return Ok(None);
        }
        if word.eq_ignore_ascii_case("me") {
            return Ok(Some(actor));
        }
        if word.eq_ignore_ascii_case("here") {
            return Ok(location);
        }
        if word.starts_with('#') {
            let id = word.parse::<EntityId>().ok();
            return Ok(id.filter(|id| self.objects.contains_key(id)));
        }

        let mut found = None;
        let scopes = std::iter::once(actor).chain(location);
        for scope in scopes {
            for (id, object) in self.contents(scope) {
                if !object.is_called(word) {
                    continue;
                }
                match found {
                    None => found = Some(id),
                    Some(other) if other == id => {}
                    // Ambiguous.
                    Some(_) => return Ok(None),
                }
            }
        }
        Ok(found)
    }
}

fn strip_article(text: &str) -> &str {
    for article in ["the ", "a ", "an "] {
        if let Some(rest) = text
            .get(..article.len())
            .filter(|head| head.eq_ignore_ascii_case(article))
            .and_then(|_| text.get(article.len()..))
            .filter(|rest| !rest.is_empty())
        {
            return rest.trim_start();
        }
    }
    text
}

/// Adds `label` as the innermost frame of `err`.
fn in_frame(err: Error, label: &str) -> Error {
    let mut context = err
        .context
        .unwrap_or_else(|| ErrorContext::new().with_source(label));
    context.stack.insert(0, label.to_string());
    Error {
        kind: err.kind,
        context: Some(context),
    }
}

/// An in-process world.
#[derive(Default)]
pub struct MemoryWorld {
    state: Mutex<WorldState>,
}

impl MemoryWorld {
    /// Creates an empty world. The first object created is `#0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, WorldState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates an object with no location.
    pub fn create(&self, name: impl Into<String>) -> EntityId {
        let mut state = self.lock();
        let id = EntityId::new(state.next_id);
        state.next_id += 1;
        state.objects.insert(id, WorldObject::new(name.into()));
        id
    }

    /// Removes an object. Things inside it are left with no location.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn recycle(&self, id: EntityId) -> Result<()> {
        let mut state = self.lock();
        state.objects.remove(&id).ok_or_else(|| Error::entity_not_found(id))?;
        for object in state.objects.values_mut() {
            if object.location == Some(id) {
                object.location = None;
            }
        }
        Ok(())
    }

    /// Returns true if `id` exists.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.lock().objects.contains_key(&id)
    }

    /// The object's name.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn name(&self, id: EntityId) -> Result<String> {
        Ok(self.lock().object(id)?.name.clone())
    }

    /// Adds names the object can be referred to by.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn add_aliases<I, S>(&self, id: EntityId, aliases: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.lock();
        state.object_mut(id)?.aliases.extend(aliases.into_iter().map(Into::into));
        Ok(())
    }

    /// Sets the programmer flag.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn set_programmer(&self, id: EntityId, programmer: bool) -> Result<()> {
        self.lock().object_mut(id)?.programmer = programmer;
        Ok(())
    }

    /// Where the object is.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn location(&self, id: EntityId) -> Result<Option<EntityId>> {
        Ok(self.lock().object(id)?.location)
    }

    /// The objects located in `container`, in id order.
    #[must_use]
    pub fn contents(&self, container: EntityId) -> Vec<EntityId> {
        self.lock().contents(container).map(|(id, _)| id).collect()
    }

    /// Moves `id` into `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if either object does not exist, or the move would
    /// put an object inside itself.
    pub fn move_to(&self, id: EntityId, destination: EntityId) -> Result<()> {
        let mut state = self.lock();
        state.object(id)?;
        let mut cursor = Some(destination);
        while let Some(at) = cursor {
            if at == id {
                return Err(Error::internal(format!("cannot move {id} into itself")));
            }
            cursor = state.object(at)?.location;
        }
        state.object_mut(id)?.location = Some(destination);
        Ok(())
    }

    /// Attaches a verb to an object, replacing any verb with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn define_verb(&self, id: EntityId, verb: VerbDef) -> Result<()> {
        let mut state = self.lock();
        let object = state.object_mut(id)?;
        object.verbs.retain(|v| v.name() != verb.name());
        object.verbs.push(verb);
        Ok(())
    }

    /// Names of the verbs on an object.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` does not exist.
    pub fn verb_names(&self, id: EntityId) -> Result<Vec<String>> {
        Ok(self
            .lock()
            .object(id)?
            .verbs
            .iter()
            .map(|v| v.name().to_string())
            .collect())
    }

    /// Registers a hook, replacing any previous one with the same scope and name.
    pub fn register_hook(
        &self,
        scope: HookScope,
        name: impl Into<String>,
        handler: impl Fn(&MemoryWorld, &[Value]) -> Result<Value> + Send + Sync + 'static,
    ) {
        self.lock().hooks.insert((scope, name.into()), Arc::new(handler));
    }

    /// Sets the evaluator for code that is not a verb invocation.
    pub fn set_evaluator(
        &self,
        evaluator: impl Fn(&MemoryWorld, &str, &str) -> Result<Value> + Send + Sync + 'static,
    ) {
        self.lock().evaluator = Some(Arc::new(evaluator));
    }

    /// Queues a line of text for a player.
    pub fn tell(&self, player: EntityId, text: impl Into<String>) {
        self.lock().notifications.entry(player).or_default().push(text.into());
    }

    /// Removes and returns the text queued for a player.
    #[must_use]
    pub fn take_notifications(&self, player: EntityId) -> Vec<String> {
        self.lock().notifications.remove(&player).unwrap_or_default()
    }

    fn invoke(&self, call: VerbCall, label: &str) -> Result<Value> {
        let handler = {
            let state = self.lock();
            let object = state.object(call.owner)?;
            object
                .verb(&call.verb)
                .map(|v| v.handler.clone())
                .ok_or_else(|| {
                    Error::script(label, format!("{}.{} is not a verb", call.owner, call.verb))
                })?
        };
        // The lock is released so the verb can call back into the world.
        handler(self, &VerbInvocation::from(call)).map_err(|err| in_frame(err, label))
    }
}

impl std::fmt::Debug for MemoryWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("MemoryWorld")
            .field("objects", &state.objects.len())
            .field("hooks", &state.hooks.len())
            .finish_non_exhaustive()
    }
}

impl WorldGateway for MemoryWorld {
    fn get(&self, id: EntityId) -> Result<Entity> {
        let state = self.lock();
        let object = state.object(id)?;
        let mut entity = Entity::new(id)
            .with_programmer(object.programmer)
            .with_verb_missing(object.verb(VerbBinding::VERB_MISSING).is_some());
        if let Some(location) = object.location {
            entity = entity.with_location(location);
        }
        Ok(entity)
    }

    fn run(&self, code: &str, label: &str) -> Result<Value> {
        if let Ok(call) = VerbCall::decode(code) {
            return self.invoke(call, label);
        }
        let evaluator = self.lock().evaluator.clone();
        match evaluator {
            Some(evaluator) => evaluator(self, code, label).map_err(|err| in_frame(err, label)),
            None => Err(in_frame(
                Error::script(label, "no evaluator is installed"),
                label,
            )),
        }
    }
}

impl HookGateway for MemoryWorld {
    fn run_hook(&self, scope: HookScope, name: &str, args: &[Value]) -> Result<HookOutcome> {
        let handler = self.lock().hooks.get(&(scope, name.to_string())).cloned();
        match handler {
            Some(handler) => handler(self, args).map(HookOutcome::ran),
            None => Ok(HookOutcome::not_ran(args.last().cloned().unwrap_or(Value::Nil))),
        }
    }
}

impl Resolver for MemoryWorld {
    fn match_objects(&self, actor: &Entity, command: &Command) -> Result<ResolutionResult> {
        let state = self.lock();
        Ok(ResolutionResult {
            dobj: state.match_name(actor.id, &command.dobjstr)?,
            iobj: state.match_name(actor.id, &command.iobjstr)?,
        })
    }

    fn match_verb(
        &self,
        actor: &Entity,
        command: &Command,
        objects: &ResolutionResult,
    ) -> Result<Option<VerbBinding>> {
        if command.verb.is_empty() || command.verb == VerbBinding::VERB_MISSING {
            return Ok(None);
        }
        let state = self.lock();
        let location = state.object(actor.id)?.location;
        let owners = [Some(actor.id), location, objects.dobj, objects.iobj];

        for owner in owners.into_iter().flatten() {
            let Some(object) = state.objects.get(&owner) else {
                continue;
            };
            let found = object
                .verbs
                .iter()
                .find(|v| v.answers_to(&command.verb) && v.accepts(owner, command, objects));
            if let Some(verb) = found {
                return Ok(Some(VerbBinding::matched(owner, verb.name())));
            }
        }
        Ok(None)
    }
}
