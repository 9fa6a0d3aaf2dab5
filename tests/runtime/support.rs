//! Recording collaborators for driving a `PlayerSession` in tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use mooring_foundation::{Entity, EntityId, Error, ErrorContext, Result, Value};
use mooring_parser::{Command, ResolutionResult, Resolver, VerbBinding};
use mooring_runtime::{
    EventLog, Gateways, HookGateway, HookOutcome, HookScope, PlayerSession, SessionConfig,
    SessionEvent, SessionRegistry, UserId, WorldGateway,
};

pub const PLAYER: EntityId = EntityId::new(7);
pub const ROOM: EntityId = EntityId::new(1);
pub const USER: &str = "user-1";

/// How a hook answers.
#[derive(Clone, Debug)]
pub enum HookReply {
    Ran(Value),
    Fails(String),
}

/// A world, hook gateway, and resolver that records every call.
#[derive(Default)]
pub struct Recorder {
    pub entities: Mutex<HashMap<EntityId, Entity>>,
    pub hooks: Mutex<HashMap<String, HookReply>>,
    pub hook_calls: Mutex<Vec<(HookScope, String, Vec<Value>)>>,
    pub runs: Mutex<Vec<(String, String)>>,
    pub run_result: Mutex<Option<String>>,
    pub run_value: Mutex<Option<Value>>,
    pub matched_commands: Mutex<Vec<Command>>,
    pub objects: Mutex<ResolutionResult>,
    pub verb: Mutex<Option<VerbBinding>>,
    pub match_error: Mutex<Option<String>>,
}

impl Recorder {
    pub fn new(player: Entity, room: Entity) -> Self {
        let recorder = Self::default();
        recorder.put(player);
        recorder.put(room);
        recorder
    }

    pub fn put(&self, entity: Entity) {
        self.entities.lock().unwrap().insert(entity.id, entity);
    }

    pub fn forget(&self, id: EntityId) {
        self.entities.lock().unwrap().remove(&id);
    }

    pub fn set_hook(&self, name: &str, reply: HookReply) {
        self.hooks.lock().unwrap().insert(name.to_string(), reply);
    }

    pub fn set_verb(&self, binding: VerbBinding) {
        *self.verb.lock().unwrap() = Some(binding);
    }

    pub fn set_objects(&self, objects: ResolutionResult) {
        *self.objects.lock().unwrap() = objects;
    }

    pub fn fail_matching(&self, message: &str) {
        *self.match_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_runs(&self, message: &str) {
        *self.run_result.lock().unwrap() = Some(message.to_string());
    }

    pub fn return_value(&self, value: Value) {
        *self.run_value.lock().unwrap() = Some(value);
    }

    pub fn runs(&self) -> Vec<(String, String)> {
        self.runs.lock().unwrap().clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.runs().into_iter().map(|(_, label)| label).collect()
    }

    pub fn hook_calls(&self, name: &str) -> Vec<(HookScope, Vec<Value>)> {
        self.hook_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, n, _)| n == name)
            .map(|(scope, _, args)| (*scope, args.clone()))
            .collect()
    }

    pub fn matched_commands(&self) -> Vec<Command> {
        self.matched_commands.lock().unwrap().clone()
    }
}

impl WorldGateway for Recorder {
    fn get(&self, id: EntityId) -> Result<Entity> {
        self.entities
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::entity_not_found(id))
    }

    fn run(&self, code: &str, label: &str) -> Result<Value> {
        self.runs
            .lock()
            .unwrap()
            .push((code.to_string(), label.to_string()));
        match self.run_result.lock().unwrap().clone() {
            Some(message) => Err(Error::script(label, message).with_context(
                ErrorContext::new()
                    .with_source(label)
                    .with_position(1, 1)
                    .with_frame(label),
            )),
            None => Ok(self.run_value.lock().unwrap().clone().unwrap_or(Value::Nil)),
        }
    }
}

impl HookGateway for Recorder {
    fn run_hook(&self, scope: HookScope, name: &str, args: &[Value]) -> Result<HookOutcome> {
        self.hook_calls
            .lock()
            .unwrap()
            .push((scope, name.to_string(), args.to_vec()));
        match self.hooks.lock().unwrap().get(name).cloned() {
            Some(HookReply::Ran(value)) => Ok(HookOutcome::ran(value)),
            Some(HookReply::Fails(message)) => Err(Error::hook(name, message)),
            None => Ok(HookOutcome::not_ran(
                args.last().cloned().unwrap_or(Value::Nil),
            )),
        }
    }
}

impl Resolver for Recorder {
    fn match_objects(&self, _actor: &Entity, command: &Command) -> Result<ResolutionResult> {
        self.matched_commands.lock().unwrap().push(command.clone());
        if let Some(message) = self.match_error.lock().unwrap().clone() {
            return Err(Error::resolution(message));
        }
        Ok(*self.objects.lock().unwrap())
    }

    fn match_verb(
        &self,
        _actor: &Entity,
        _command: &Command,
        _objects: &ResolutionResult,
    ) -> Result<Option<VerbBinding>> {
        Ok(self.verb.lock().unwrap().clone())
    }
}

/// A session wired to a [`Recorder`].
pub struct Harness {
    pub world: Arc<Recorder>,
    pub session: PlayerSession,
    pub events: EventLog,
    pub registry: SessionRegistry,
}

impl Harness {
    /// A player in a room without a missing-verb handler.
    pub fn new(programmer: bool) -> Self {
        Self::build(programmer, false, SessionConfig::plain())
    }

    /// A player in a room that handles missing verbs.
    pub fn with_verb_missing(programmer: bool) -> Self {
        Self::build(programmer, true, SessionConfig::plain())
    }

    /// A player with styled output.
    pub fn colored(programmer: bool) -> Self {
        Self::build(programmer, false, SessionConfig::default())
    }

    /// A player with a custom session configuration.
    pub fn configured(programmer: bool, config: SessionConfig) -> Self {
        Self::build(programmer, false, config)
    }

    fn build(programmer: bool, verb_missing: bool, config: SessionConfig) -> Self {
        let player = Entity::new(PLAYER)
            .with_programmer(programmer)
            .with_location(ROOM);
        let room = Entity::new(ROOM).with_verb_missing(verb_missing);
        let world = Arc::new(Recorder::new(player, room));

        let registry = SessionRegistry::new();
        registry.register(PLAYER, UserId::new(USER));
        let events = EventLog::new();
        let session = PlayerSession::new(
            UserId::new(USER),
            PLAYER,
            Gateways::shared(world.clone()),
            registry.clone(),
            events.clone(),
        )
        .with_config(config);

        Self {
            world,
            session,
            events,
            registry,
        }
    }

    pub fn input(&mut self, line: &str) {
        self.session.on_input(line);
    }

    pub fn outputs(&self) -> Vec<String> {
        self.events.outputs()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.snapshot()
    }
}
