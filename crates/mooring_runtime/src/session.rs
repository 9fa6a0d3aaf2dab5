//! The per-player session controller.
//!
//! A [`PlayerSession`] owns one connection's dispatch pipeline:
//!
//! ```text
//! input ─► preprocessCommand hook ─► parse ─► classify
//!                                               │
//!                 ┌─────────────────┬───────────┴──────────┐
//!                 ▼                 ▼                      ▼
//!               Eval              Quit                  Resolve
//!          (programmers)     (hook, prompt,     match objects ─► match verb
//!                           farewell, unkey)          │            │
//!                                                     │     none ──┴─► verbMissing?
//!                                                     ▼
//!                                                run verb code
//! ```
//!
//! Every step that can run world code ends in the failure boundary (see
//! [`crate::boundary`]): errors are logged at `warn` and disclosed according
//! to the player's privilege. `on_input` never returns an error.

use mooring_foundation::{Entity, EntityId, Error, Result, Value};
use mooring_language::{VerbCall, escape, eval_label, format_value, rewrite_eval};
use mooring_parser::{Command, CommandParser, ResolutionResult, VerbBinding};
use tracing::Span;

use crate::boundary::{FailureSite, disclose, serialize};
use crate::config::SessionConfig;
use crate::dispatch::{Disposition, EVAL_VERB};
use crate::events::{EventSink, SessionEvent, UserId};
use crate::gateway::{Gateways, HookScope};
use crate::registry::SessionRegistry;
use crate::style::Styler;

/// System hook that may rewrite raw input before parsing.
pub const PREPROCESS_HOOK: &str = "preprocessCommand";

/// System hook notified when a player quits.
pub const DISCONNECT_HOOK: &str = "onPlayerDisconnected";

/// Entity hook notified of tab key presses.
pub const TAB_HOOK: &str = "onTabKeyPress";

/// Direction of a tab key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDirection {
    /// Plain tab.
    Forward,
    /// Shift-tab.
    Backward,
}

impl TabDirection {
    /// The name passed to the hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Dispatches one connected user's input on behalf of the entity they embody.
pub struct PlayerSession {
    /// The connected user.
    user: UserId,

    /// The embodied entity. Cleared exactly once, on quit.
    player: Option<EntityId>,

    /// Logging context; a child of the owning transport session's span.
    span: Span,

    /// Shared table this session removes itself from on quit.
    registry: SessionRegistry,

    /// World, hooks, and resolver.
    gateways: Gateways,

    /// Input to command.
    parser: CommandParser,

    /// Where output and prompt changes go.
    events: Box<dyn EventSink>,

    /// Messages and styling.
    config: SessionConfig,
}

impl PlayerSession {
    /// Creates a session for `user` embodying `player`.
    ///
    /// The session's span is a child of the current span. Registering the
    /// session in `registry` is the caller's job.
    pub fn new(
        user: UserId,
        player: EntityId,
        gateways: Gateways,
        registry: SessionRegistry,
        events: impl EventSink + 'static,
    ) -> Self {
        let span = session_span(&Span::current(), &user, player);
        Self {
            user,
            player: Some(player),
            span,
            registry,
            gateways,
            parser: CommandParser::default(),
            events: Box::new(events),
            config: SessionConfig::default(),
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to set the command parser.
    #[must_use]
    pub fn with_parser(mut self, parser: CommandParser) -> Self {
        self.parser = parser;
        self
    }

    /// Builder method to nest this session's logs under `parent`.
    #[must_use]
    pub fn with_parent_span(mut self, parent: &Span) -> Self {
        if let Some(player) = self.player {
            self.span = session_span(parent, &self.user, player);
        }
        self
    }

    /// The connected user.
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// The embodied entity, or `None` once the session has quit.
    #[must_use]
    pub const fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// Returns true once the session has quit.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        self.player.is_none()
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The session's logging span.
    #[must_use]
    pub const fn span(&self) -> &Span {
        &self.span
    }

    /// Dispatches one line of input.
    pub fn on_input(&mut self, input: &str) {
        let span = self.span.clone();
        let _entered = span.enter();

        let Some(player_id) = self.player else {
            tracing::debug!("input after quit ignored");
            return;
        };

        let player = match self.gateways.world.get(player_id) {
            Ok(player) => player,
            Err(err) => {
                // Privilege is unknown without the entity.
                self.contain(FailureSite::LoadPlayer, &err, player_id, false);
                return;
            }
        };

        let text = match self.preprocess(&player, input) {
            Ok(text) => text,
            Err(err) => {
                self.contain(FailureSite::Preprocess, &err, player.id, player.programmer);
                return;
            }
        };
        let command = self.parser.parse(&text);

        match Disposition::classify(&command, &player) {
            Disposition::Eval => self.eval(&player, &command.argstr),
            Disposition::Quit => self.quit(&player),
            Disposition::Resolve => {
                if command.verb == EVAL_VERB {
                    tracing::debug!("eval declined for non-programmer");
                }
                self.resolve(&player, &command);
            }
        }
    }

    /// Tells the player's entity that tab was pressed. Best-effort.
    pub fn on_tab_key_press(&self, direction: TabDirection) {
        let Some(player) = self.player else {
            return;
        };
        let _entered = self.span.enter();
        self.gateways.hooks.run_hook_best_effort(
            HookScope::Entity(player),
            TAB_HOOK,
            &[Value::from(direction.as_str())],
        );
    }

    /// Runs the preprocessing hook and picks the text to parse.
    ///
    /// The hook sees the input as an escaped literal. When it does not run,
    /// or returns something other than a string, the raw input is parsed.
    fn preprocess(&self, player: &Entity, input: &str) -> Result<String> {
        let args = [Value::Entity(player.id), Value::from(escape(input))];
        let outcome = self
            .gateways
            .hooks
            .run_hook_or_fail(HookScope::System, PREPROCESS_HOOK, &args)?;
        match outcome.into_ran_value() {
            Some(Value::String(text)) => Ok(text.to_string()),
            Some(other) => {
                tracing::debug!(
                    returned = other.type_name(),
                    "preprocess hook returned a non-string; parsing raw input"
                );
                Ok(input.to_string())
            }
            None => Ok(input.to_string()),
        }
    }

    fn eval(&self, player: &Entity, source: &str) {
        let code = rewrite_eval(source, player.id);
        let label = eval_label(player.id);
        tracing::debug!(%code, "eval");

        match self.gateways.world.run(&code, &label) {
            Ok(value) => self.output(format_value(&value, self.config.eval_depth)),
            // Only programmers get here.
            Err(err) => self.contain(FailureSite::Eval, &err, player.id, true),
        }
    }

    fn quit(&mut self, player: &Entity) {
        self.gateways.hooks.run_hook_best_effort(
            HookScope::System,
            DISCONNECT_HOOK,
            &[Value::Entity(player.id)],
        );
        self.events.emit(SessionEvent::SetPrompt(self.user.clone()));
        self.output(self.config.farewell.clone());
        self.registry.remove(player.id);
        self.player = None;
        tracing::info!("player quit");
    }

    fn resolve(&self, player: &Entity, command: &Command) {
        match self.match_command(player, command) {
            Ok(Some((objects, binding))) => self.run_verb(player, &binding, &objects, command),
            Ok(None) => {
                let styler = self.styler();
                self.output(styler.muted(&self.config.not_understood));
            }
            Err(err) => self.contain(FailureSite::Matching, &err, player.id, player.programmer),
        }
    }

    /// Finds the verb to run, falling back to the location's missing-verb
    /// handler when nothing matched.
    fn match_command(
        &self,
        player: &Entity,
        command: &Command,
    ) -> Result<Option<(ResolutionResult, VerbBinding)>> {
        let resolver = &self.gateways.resolver;
        let objects = resolver.match_objects(player, command)?;
        if let Some(binding) = resolver.match_verb(player, command, &objects)? {
            return Ok(Some((objects, binding)));
        }

        let Some(location) = player.location else {
            return Ok(None);
        };
        let location = self.gateways.world.get(location)?;
        Ok(location
            .verb_missing
            .then(|| (objects, VerbBinding::verb_missing(location.id))))
    }

    fn run_verb(
        &self,
        player: &Entity,
        binding: &VerbBinding,
        objects: &ResolutionResult,
        command: &Command,
    ) {
        let call = VerbCall::new(binding, player.id, objects, command);
        let code = call.to_code();
        let label = call.label();
        tracing::debug!(%code, "run verb");

        // The return value is not used; verbs produce their own output.
        if let Err(err) = self.gateways.world.run(&code, &label) {
            self.contain(FailureSite::RunVerb, &err, player.id, player.programmer);
        }
    }

    /// The failure boundary: disclose by privilege, always log, never raise.
    fn contain(&self, site: FailureSite, err: &Error, player: EntityId, privileged: bool) {
        let text = disclose(err, privileged);
        self.output(self.styler().error(&text));
        tracing::warn!(
            user = %self.user,
            player = %player,
            err = %serialize(err),
            "{}",
            site.message()
        );
    }

    fn output(&self, text: String) {
        self.events.emit(SessionEvent::Output(text));
    }

    const fn styler(&self) -> Styler {
        Styler::new(self.config.color)
    }
}

impl std::fmt::Debug for PlayerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerSession")
            .field("user", &self.user)
            .field("player", &self.player)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn session_span(parent: &Span, user: &UserId, player: EntityId) -> Span {
    tracing::info_span!(parent: parent, "session", user = %user, player = %player)
}
