//! Error types

use thiserror::Error;

/// Command string parsing error
///
/// `offset` is the character offset of the command letter at fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported command: {command} (at offset {offset})")]
    UnsupportedCommand { command: char, offset: usize },

    #[error("Missing argument for command '{command}' (at offset {offset})")]
    MissingArgument { command: char, offset: usize },
}

/// Parse error category, for callers that only care about the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnsupportedCommand,
    MissingArgument,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnsupportedCommand { .. } => ParseErrorKind::UnsupportedCommand,
            ParseError::MissingArgument { .. } => ParseErrorKind::MissingArgument,
        }
    }

    pub fn command(&self) -> char {
        match self {
            ParseError::UnsupportedCommand { command, .. }
            | ParseError::MissingArgument { command, .. } => *command,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnsupportedCommand { offset, .. }
            | ParseError::MissingArgument { offset, .. } => *offset,
        }
    }
}

/// Configuration error
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
