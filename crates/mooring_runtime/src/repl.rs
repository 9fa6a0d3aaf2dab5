//! A console connection to an in-process world.
//!
//! The REPL plays the part of a transport: it owns one [`PlayerSession`],
//! feeds it lines from a [`LineEditor`], and prints whatever the session
//! and the world send back to the player.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use mooring_foundation::{EntityId, Result};
use mooring_parser::{CommandParser, Vocabulary};

use crate::config::SessionConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::events::{SessionEvent, UserId};
use crate::gateway::Gateways;
use crate::memory::MemoryWorld;
use crate::registry::SessionRegistry;
use crate::session::PlayerSession;

/// User id of the console connection.
pub const CONSOLE_USER: &str = "console";

/// The interactive console.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The session being driven.
    session: PlayerSession,

    /// Events emitted by the session.
    events: Receiver<SessionEvent>,

    /// The world, for reading the player's notifications.
    world: Arc<MemoryWorld>,

    /// The embodied entity; kept after the session retires.
    player: EntityId,

    /// Shared session table.
    registry: SessionRegistry,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(world: Arc<MemoryWorld>, player: EntityId, config: SessionConfig) -> Result<Self> {
        let editor = RustylineEditor::new(Vocabulary::default())?;
        Ok(Self::with_editor(editor, world, player, config))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(
        editor: E,
        world: Arc<MemoryWorld>,
        player: EntityId,
        config: SessionConfig,
    ) -> Self {
        let (tx, events) = mpsc::channel();
        let registry = SessionRegistry::new();
        let user = UserId::new(CONSOLE_USER);
        registry.register(player, user.clone());

        let session = PlayerSession::new(
            user,
            player,
            Gateways::shared(world.clone()),
            registry.clone(),
            tx,
        )
        .with_config(config)
        .with_parser(CommandParser::new(Vocabulary::default()));

        Self {
            editor,
            session,
            events,
            world,
            player,
            registry,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &PlayerSession {
        &self.session
    }

    /// Returns the session registry.
    #[must_use]
    pub const fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Runs the REPL loop until EOF or quit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while !self.session.is_retired() {
            self.editor.set_completions(self.completion_words());
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    for text in self.step(&line) {
                        println!("{text}");
                    }
                }
                ReadResult::Interrupted => println!(),
                ReadResult::Eof => break,
            }
        }

        Ok(())
    }

    /// Sends one line to the session and collects what the player sees.
    ///
    /// World notifications come first, then session output.
    pub fn step(&mut self, line: &str) -> Vec<String> {
        self.session.on_input(line);

        let mut lines = self.world.take_notifications(self.player);
        for event in self.events.try_iter() {
            match event {
                SessionEvent::Output(text) => lines.push(text),
                SessionEvent::SetPrompt(user) => {
                    tracing::debug!(%user, "returned to login prompt");
                }
            }
        }
        lines
    }

    /// Verb and object names near the player.
    fn completion_words(&self) -> Vec<String> {
        let mut owners = vec![self.player];
        if let Ok(Some(room)) = self.world.location(self.player) {
            owners.push(room);
            owners.extend(self.world.contents(room));
        }
        owners.extend(self.world.contents(self.player));

        let mut words = vec!["quit".to_string(), "me".to_string(), "here".to_string()];
        for owner in owners {
            if let Ok(verbs) = self.world.verb_names(owner) {
                words.extend(verbs.into_iter().filter(|v| v != "verbMissing"));
            }
            if owner != self.player {
                if let Ok(name) = self.world.name(owner) {
                    words.extend(name.split_whitespace().map(str::to_lowercase));
                }
            }
        }
        words.sort();
        words.dedup();
        words
    }

    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!(
            "\x1b[1mMooring\x1b[0m {} - type \x1b[1mlook\x1b[0m to begin, \x1b[1mquit\x1b[0m to leave.",
            env!("CARGO_PKG_VERSION")
        );
        println!();
    }
}
