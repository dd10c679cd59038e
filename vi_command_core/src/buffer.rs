//! Text buffer

use core::fmt;

/// Text buffer with character-indexed storage
///
/// Offsets are counted in `char`s, never bytes. Every edit is bounds
/// tolerant: an offset past the end makes the edit a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            chars: content.as_ref().chars().collect(),
        }
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of the last character, or 0 when the buffer is empty
    pub fn last_index(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Overwrite the character at `index`
    pub fn replace_char(&mut self, index: usize, ch: char) -> bool {
        match self.chars.get_mut(index) {
            Some(slot) => {
                *slot = ch;
                true
            }
            None => false,
        }
    }

    /// Remove up to `count` characters starting at `start`
    ///
    /// A range reaching the end truncates the buffer at `start`.
    /// Returns the number of characters removed.
    pub fn delete(&mut self, start: usize, count: usize) -> usize {
        if start >= self.chars.len() {
            return 0;
        }

        let end = start.saturating_add(count);
        if end >= self.chars.len() {
            let removed = self.chars.len() - start;
            self.chars.truncate(start);
            removed
        } else {
            self.chars.drain(start..end);
            count
        }
    }

    /// First index at or after `from` holding `ch`
    pub fn find_from(&self, from: usize, ch: char) -> Option<usize> {
        self.chars
            .get(from..)?
            .iter()
            .position(|&c| c == ch)
            .map(|pos| from + pos)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
