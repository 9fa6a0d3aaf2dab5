//! Verb invocation fragments.
//!
//! A verb call is rendered as
//!
//! ```text
//! #12["look"](#7, void 0, #42, "look", "at #42", "", "at", "#42")
//! ```
//!
//! with the positional arguments: player, direct object, indirect object,
//! then the five command strings (verb, argstr, dobjstr, prepstr, iobjstr).
//! An object role with nothing bound is written as the `void 0` sentinel,
//! which can never be mistaken for an entity literal.

use std::fmt;

use mooring_foundation::{EntityId, Error, ErrorKind, Result};
use mooring_parser::{Command, ResolutionResult, VerbBinding};

use crate::literal::{decode, escape, literal_len};

/// Sentinel written for an object role that has no entity.
pub const VOID: &str = "void 0";

/// An object argument: a bound entity or nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectArg {
    /// The role is bound to this entity.
    Entity(EntityId),
    /// Nothing was resolved for the role.
    Void,
}

impl From<Option<EntityId>> for ObjectArg {
    fn from(id: Option<EntityId>) -> Self {
        id.map_or(Self::Void, Self::Entity)
    }
}

impl From<ObjectArg> for Option<EntityId> {
    fn from(arg: ObjectArg) -> Self {
        match arg {
            ObjectArg::Entity(id) => Some(id),
            ObjectArg::Void => None,
        }
    }
}

impl fmt::Display for ObjectArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(id) => write!(f, "{id}"),
            Self::Void => f.write_str(VOID),
        }
    }
}

/// A fully bound verb call, ready to be rendered for the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbCall {
    /// Entity the verb lives on.
    pub owner: EntityId,
    /// Verb name.
    pub verb: String,
    /// The invoking player.
    pub player: EntityId,
    /// Direct object argument.
    pub dobj: ObjectArg,
    /// Indirect object argument.
    pub iobj: ObjectArg,
    /// The parsed command whose strings are passed along.
    pub command: Command,
}

impl VerbCall {
    /// Binds a resolved command to a verb.
    #[must_use]
    pub fn new(
        binding: &VerbBinding,
        player: EntityId,
        objects: &ResolutionResult,
        command: &Command,
    ) -> Self {
        Self {
            owner: binding.owner,
            verb: binding.verb.clone(),
            player,
            dobj: objects.dobj.into(),
            iobj: objects.iobj.into(),
            command: command.clone(),
        }
    }

    /// The rendered positional arguments, in call order.
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(8);
        args.push(self.player.to_string());
        args.push(self.dobj.to_string());
        args.push(self.iobj.to_string());
        args.extend(self.command.fields().into_iter().map(escape));
        args
    }

    /// Renders the invocation fragment.
    #[must_use]
    pub fn to_code(&self) -> String {
        format!(
            "{}[{}]({})",
            self.owner,
            escape(&self.verb),
            self.arguments().join(", ")
        )
    }

    /// Execution label for logs and stack traces.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Verb::{}.{}", self.owner, self.verb)
    }

    /// Parses a fragment produced by [`VerbCall::to_code`].
    ///
    /// # Errors
    ///
    /// Returns an error if `code` is not a verb invocation fragment.
    pub fn decode(code: &str) -> Result<Self> {
        let mut cursor = Cursor::new(code.trim());

        let owner = cursor.entity()?;
        cursor.expect("[")?;
        let verb = cursor.string()?;
        cursor.expect("](")?;
        let player = cursor.entity()?;
        cursor.expect(",")?;
        let dobj = cursor.object()?;
        cursor.expect(",")?;
        let iobj = cursor.object()?;
        let mut fields: [String; 5] = Default::default();
        for field in &mut fields {
            cursor.expect(",")?;
            *field = cursor.string()?;
        }
        cursor.expect(")")?;
        cursor.finish()?;

        let [verb_str, argstr, dobjstr, prepstr, iobjstr] = fields;
        Ok(Self {
            owner,
            verb,
            player,
            dobj,
            iobj,
            command: Command {
                verb: verb_str,
                argstr,
                dobjstr,
                prepstr,
                iobjstr,
            },
        })
    }
}

/// Scanner over a fragment being decoded.
struct Cursor<'src> {
    source: &'src str,
    rest: &'src str,
}

impl<'src> Cursor<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    fn error(&self, expected: &str) -> Error {
        let offset = self.source.len() - self.rest.len();
        Error::new(ErrorKind::Literal(format!(
            "expected {expected} at offset {offset} in {:?}",
            self.source
        )))
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        self.skip_whitespace();
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(self.error(&format!("{token:?}"))),
        }
    }

    fn entity(&mut self) -> Result<EntityId> {
        self.skip_whitespace();
        let len = self
            .rest
            .strip_prefix('#')
            .map(|digits| 1 + digits.bytes().take_while(u8::is_ascii_digit).count())
            .ok_or_else(|| self.error("entity literal"))?;
        let id = self.rest[..len]
            .parse()
            .map_err(|_| self.error("entity literal"))?;
        self.rest = &self.rest[len..];
        Ok(id)
    }

    fn object(&mut self) -> Result<ObjectArg> {
        self.skip_whitespace();
        if let Some(rest) = self.rest.strip_prefix(VOID) {
            self.rest = rest;
            return Ok(ObjectArg::Void);
        }
        self.entity().map(ObjectArg::Entity)
    }

    fn string(&mut self) -> Result<String> {
        self.skip_whitespace();
        let len = literal_len(self.rest).ok_or_else(|| self.error("string literal"))?;
        let value = decode(&self.rest[..len])?;
        self.rest = &self.rest[len..];
        Ok(value)
    }

    fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(self.error("end of fragment"))
        }
    }
}
