//! A small sample world for the `mooring` binary.

use std::sync::Arc;

use mooring_foundation::{EntityId, Error, ErrorContext, MrMap, MrVec, Result, Value};

use crate::memory::{MemoryWorld, ObjSpec, PrepSpec, VerbDef, VerbInvocation};

/// The sample world and the entity the console player embodies.
#[derive(Debug)]
pub struct DemoWorld {
    /// The world.
    pub world: Arc<MemoryWorld>,
    /// The console player.
    pub player: EntityId,
    /// The starting room.
    pub lobby: EntityId,
}

/// Builds the sample world.
///
/// # Errors
///
/// Returns an error if the world cannot be assembled.
pub fn demo_world(programmer: bool) -> Result<DemoWorld> {
    let world = Arc::new(MemoryWorld::new());
    let lobby = world.create("Lobby");
    let garden = world.create("Garden");
    let player = world.create("Wizard");
    let lamp = world.create("brass lamp");
    let chest = world.create("oak chest");

    world.set_programmer(player, programmer)?;
    world.add_aliases(lamp, ["lamp"])?;
    world.add_aliases(chest, ["chest"])?;
    world.move_to(player, lobby)?;
    world.move_to(lamp, lobby)?;
    world.move_to(chest, lobby)?;

    for room in [lobby, garden] {
        world.define_verb(room, look_verb())?;
        world.define_verb(room, say_verb())?;
        world.define_verb(room, emote_verb())?;
        world.define_verb(room, take_verb())?;
        world.define_verb(room, drop_verb())?;
    }
    world.define_verb(lobby, go_verb(garden))?;
    world.define_verb(garden, go_verb(lobby))?;
    world.define_verb(lobby, verb_missing())?;
    world.define_verb(player, inventory_verb())?;
    world.define_verb(
        chest,
        VerbDef::new("put", |world, call| {
            let (Some(thing), Some(chest)) = (call.dobj, call.iobj) else {
                world.tell(call.player, "Put what?");
                return Ok(Value::Nil);
            };
            world.move_to(thing, chest)?;
            world.tell(call.player, format!("You put {} in {}.", world.name(thing)?, world.name(chest)?));
            Ok(Value::Nil)
        })
        .with_args(ObjSpec::Any, PrepSpec::Is("in".into()), ObjSpec::This),
    )?;
    world.define_verb(
        lamp,
        VerbDef::new("rub", |_, call| {
            Err(Error::script(format!("Verb::{}.rub", call.this), "the genie is out")
                .with_context(ErrorContext::new().with_position(3, 7)))
        })
        .with_args(ObjSpec::This, PrepSpec::None, ObjSpec::None),
    )?;

    let player_for_eval = player;
    world.set_evaluator(move |world, code, label| literal_eval(world, code, label, player_for_eval));

    Ok(DemoWorld {
        world,
        player,
        lobby,
    })
}

fn look_verb() -> VerbDef {
    VerbDef::new("look", |world, call| {
        let Some(room) = world.location(call.player)? else {
            world.tell(call.player, "You are nowhere.");
            return Ok(Value::Nil);
        };
        if let Some(thing) = call.dobj {
            world.tell(call.player, format!("You see {}.", world.name(thing)?));
            return Ok(Value::Nil);
        }
        world.tell(call.player, world.name(room)?);
        let others = names_except(world, room, call.player)?;
        if !others.is_empty() {
            world.tell(call.player, format!("You see: {}.", others.join(", ")));
        }
        Ok(Value::Nil)
    })
    .with_alias("l")
}

fn say_verb() -> VerbDef {
    VerbDef::new("say", |world, call| {
        let speaker = world.name(call.player)?;
        broadcast(world, call, &format!("{speaker} says, \"{}\"", call.command.argstr))
    })
}

fn emote_verb() -> VerbDef {
    VerbDef::new("emote", |world, call| {
        let speaker = world.name(call.player)?;
        broadcast(world, call, &format!("{speaker} {}", call.command.argstr))
    })
}

fn take_verb() -> VerbDef {
    VerbDef::new("take", |world, call| {
        match call.dobj {
            Some(thing) if thing != call.player && thing != call.this => {
                world.move_to(thing, call.player)?;
                world.tell(call.player, format!("Taken: {}.", world.name(thing)?));
            }
            _ => world.tell(call.player, format!("You can't take {:?}.", call.command.dobjstr)),
        }
        Ok(Value::Nil)
    })
    .with_alias("get")
}

fn drop_verb() -> VerbDef {
    VerbDef::new("drop", |world, call| {
        match call.dobj {
            Some(thing) if world.location(thing)? == Some(call.player) => {
                world.move_to(thing, call.this)?;
                world.tell(call.player, format!("Dropped: {}.", world.name(thing)?));
            }
            _ => world.tell(call.player, "You aren't carrying that."),
        }
        Ok(Value::Nil)
    })
}

fn go_verb(destination: EntityId) -> VerbDef {
    VerbDef::new("go", move |world, call| {
        world.move_to(call.player, destination)?;
        world.tell(call.player, format!("You go to the {}.", world.name(destination)?));
        Ok(Value::Nil)
    })
    .with_alias("walk")
}

fn verb_missing() -> VerbDef {
    VerbDef::new("verbMissing", |world, call| {
        world.tell(
            call.player,
            format!("The lobby echoes: {:?}?", call.command.verb),
        );
        Ok(Value::Nil)
    })
}

fn inventory_verb() -> VerbDef {
    VerbDef::new("inventory", |world, call| {
        let carried = names_except(world, call.player, call.player)?;
        if carried.is_empty() {
            world.tell(call.player, "You are empty-handed.");
        } else {
            world.tell(call.player, format!("You carry: {}.", carried.join(", ")));
        }
        Ok(Value::Nil)
    })
    .with_alias("i")
    .with_args(ObjSpec::None, PrepSpec::None, ObjSpec::None)
}

fn names_except(world: &MemoryWorld, container: EntityId, skip: EntityId) -> Result<Vec<String>> {
    world
        .contents(container)
        .into_iter()
        .filter(|id| *id != skip)
        .map(|id| world.name(id))
        .collect()
}

fn broadcast(world: &MemoryWorld, call: &VerbInvocation, text: &str) -> Result<Value> {
    let room = world.location(call.player)?.unwrap_or(call.this);
    for listener in world.contents(room) {
        world.tell(listener, text);
    }
    Ok(Value::Nil)
}

/// Evaluates eval units whose result is a literal, `player`, or `#N`.
///
/// Statements other than the returned expression are ignored.
fn literal_eval(_world: &MemoryWorld, code: &str, label: &str, player: EntityId) -> Result<Value> {
    let Some(start) = code.rfind("  return (") else {
        return Ok(Value::Nil);
    };
    let rest = &code[start + "  return (".len()..];
    let Some(end) = rest.rfind(");\n") else {
        return Err(Error::script(label, "malformed eval unit"));
    };
    let expr = rest[..end].trim();

    if expr == "player" {
        return Ok(Value::Entity(player));
    }
    if let Ok(id) = expr.parse::<EntityId>() {
        return Ok(Value::Entity(id));
    }
    match serde_json::from_str::<serde_json::Value>(expr) {
        Ok(json) => Ok(from_json(json)),
        Err(_) => Err(Error::script(label, format!("cannot evaluate {expr}"))
            .with_context(ErrorContext::new().with_source(label).with_position(2, 10))),
    }
}

fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int),
        serde_json::Value::String(s) => Value::from(s),
        serde_json::Value::Array(items) => Value::List(items.into_iter().map(from_json).collect::<MrVec<_>>()),
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect::<MrMap<_>>(),
        ),
    }
}
