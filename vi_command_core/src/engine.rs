//! Engine state machine
//!
//! Owns the cursor, the text and the undo history. Commands are applied
//! one at a time; every command except `Undo` first records a snapshot of
//! the state it is about to change.

use log::debug;

use crate::{
    buffer::TextBuffer,
    command::Command,
    config::HistoryConfig,
    count::Count,
    history::History,
    snapshot::Snapshot,
};

/// Buffer engine
#[derive(Debug, Clone)]
pub struct Engine {
    buffer: TextBuffer,
    cursor: usize,
    history: History,
}

impl Engine {
    /// Create an engine over `text` with the cursor at 0
    ///
    /// The history is seeded with the initial state so undo can always
    /// get back to it.
    pub fn new(text: impl AsRef<str>, config: HistoryConfig) -> Self {
        let buffer = TextBuffer::from_string(text);
        let mut history = History::new(config);
        history.push(Snapshot::new(0, buffer.as_string()));

        Self {
            buffer,
            cursor: 0,
            history,
        }
    }

    /// Apply every command in order
    pub fn run<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.apply(command);
        }
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) {
        debug!("apply {:?} at cursor {}", command, self.cursor);

        if command.records_history() {
            self.history.push(self.snapshot());
        }

        match command {
            Command::MoveLeft(n) => self.move_left(n),
            Command::MoveRight(n) => self.move_right(n),
            Command::Replace(n, ch) => self.replace(n, ch),
            Command::MoveToNext(ch) => self.move_to_next(ch),
            Command::Delete(n) => self.delete(n),
            Command::Undo(n) => self.undo(n),
        }
    }

    /// Capture the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cursor, self.buffer.as_string())
    }

    // Public accessors for rendering/testing
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.as_string()
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    // Command effects

    fn move_left(&mut self, n: Count) {
        self.cursor = self.cursor.saturating_sub(n.get());
    }

    fn move_right(&mut self, n: Count) {
        self.cursor = self
            .cursor
            .saturating_add(n.get())
            .min(self.buffer.last_index());
    }

    /// Deleting does not pull the cursor back inside the text
    fn delete(&mut self, n: Count) {
        self.buffer.delete(self.cursor, n.get());
    }

    fn replace(&mut self, n: Count, ch: char) {
        if n == Count::ONE {
            self.buffer.replace_char(self.cursor, ch);
            return;
        }

        for _ in 0..n.get() {
            if !self.buffer.replace_char(self.cursor, ch) {
                break;
            }
            self.cursor += 1;
            if self.cursor >= self.buffer.len() {
                self.cursor -= 1;
                break;
            }
        }
    }

    fn move_to_next(&mut self, ch: char) {
        if let Some(index) = self.buffer.find_from(self.cursor, ch) {
            self.cursor = index;
        }
    }

    /// Popping from an empty history leaves the state as it is
    fn undo(&mut self, n: Count) {
        if let Some(snapshot) = self.history.pop_many(n.get()) {
            self.buffer = TextBuffer::from_string(&snapshot.text);
            self.cursor = snapshot.cursor;
        }
    }
}
