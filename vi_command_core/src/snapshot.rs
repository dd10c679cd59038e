//! Editor state snapshots

use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Immutable capture of cursor and text at one point in history
///
/// Holds a full copy of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub cursor: usize,
    pub text: String,
}

impl Snapshot {
    pub fn new(cursor: usize, text: impl Into<String>) -> Self {
        Self {
            cursor,
            text: text.into(),
        }
    }
}

/// Renders the exit-time printout: the text, then `Cursor: <n>`
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        write!(f, "Cursor: {}", self.cursor)
    }
}
