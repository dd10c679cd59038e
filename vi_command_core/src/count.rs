//! Repeat counts

use core::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// How many times a command repeats
///
/// `Unbounded` comes from a digit run too long to represent; it means
/// "repeat until the command runs out of buffer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Count {
    Times(usize),
    Unbounded,
}

impl Count {
    /// Count used when no digits precede a command letter
    pub const ONE: Count = Count::Times(1);

    /// Numeric value, with `Unbounded` mapped to `usize::MAX`
    pub fn get(self) -> usize {
        match self {
            Count::Times(n) => n,
            Count::Unbounded => usize::MAX,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Count::Unbounded)
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::ONE
    }
}

impl From<usize> for Count {
    fn from(n: usize) -> Self {
        Count::Times(n)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Times(n) => write!(f, "{}", n),
            Count::Unbounded => write!(f, "unbounded"),
        }
    }
}
