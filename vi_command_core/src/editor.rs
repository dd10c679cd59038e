//! Construct-and-run editor facade

use core::fmt;

use log::debug;

use crate::{
    command::Command,
    config::EditorConfig,
    engine::Engine,
    error::ParseError,
    parser::CommandParser,
    snapshot::Snapshot,
};

/// An editing session that has already run its command string
///
/// Construction parses the full command string first and only then runs
/// it, so a parse failure never exposes a partially edited buffer.
#[derive(Debug, Clone)]
pub struct Editor {
    engine: Engine,
    commands: Vec<Command>,
}

impl Editor {
    /// Run `commands` against `text` with the default configuration
    pub fn new(text: &str, commands: &str) -> Result<Self, ParseError> {
        Self::with_config(text, commands, &EditorConfig::default())
    }

    pub fn with_config(
        text: &str,
        commands: &str,
        config: &EditorConfig,
    ) -> Result<Self, ParseError> {
        let parsed = CommandParser::new(config.parser).parse(commands)?;

        let mut engine = Engine::new(text, config.history);
        engine.run(parsed.iter().copied());
        debug!(
            "ran {} command(s), cursor={} history_depth={}",
            parsed.len(),
            engine.cursor(),
            engine.history_depth()
        );

        Ok(Self {
            engine,
            commands: parsed,
        })
    }

    pub fn text(&self) -> String {
        self.engine.text()
    }

    pub fn cursor(&self) -> usize {
        self.engine.cursor()
    }

    /// Commands that were run, in order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Hand the engine over so a host can keep applying commands
    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
