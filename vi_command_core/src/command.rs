//! Editing commands

use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::count::Count;

/// Parsed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Command {
    /// `h`: move the cursor left
    MoveLeft(Count),
    /// `l`: move the cursor right, stopping on the last character
    MoveRight(Count),
    /// `r<ch>`: overwrite characters starting at the cursor
    Replace(Count, char),
    /// `f<ch>`: jump to the next occurrence of a character
    MoveToNext(char),
    /// `x`: delete characters starting at the cursor
    Delete(Count),
    /// `u`: roll back earlier commands
    Undo(Count),
}

impl Command {
    /// The command letter this command is written with
    pub fn letter(&self) -> char {
        match self {
            Command::MoveLeft(_) => 'h',
            Command::MoveRight(_) => 'l',
            Command::Replace(..) => 'r',
            Command::MoveToNext(_) => 'f',
            Command::Delete(_) => 'x',
            Command::Undo(_) => 'u',
        }
    }

    /// Repeat count, if the command takes one
    pub fn count(&self) -> Option<Count> {
        match self {
            Command::MoveLeft(n)
            | Command::MoveRight(n)
            | Command::Replace(n, _)
            | Command::Delete(n)
            | Command::Undo(n) => Some(*n),
            Command::MoveToNext(_) => None,
        }
    }

    /// Whether running this command records a history snapshot first
    pub fn records_history(&self) -> bool {
        !matches!(self, Command::Undo(_))
    }
}

/// Writes the command back in command-string form (`3rX`, `fz`, `u`)
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count() {
            Some(Count::Times(1)) | None => {}
            Some(Count::Times(n)) => write!(f, "{}", n)?,
            Some(Count::Unbounded) => write!(f, "{}", usize::MAX)?,
        }
        write!(f, "{}", self.letter())?;
        match self {
            Command::Replace(_, ch) | Command::MoveToNext(ch) => write!(f, "{}", ch),
            _ => Ok(()),
        }
    }
}
