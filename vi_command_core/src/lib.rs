//! # vi Command Core
//!
//! Interprets a compact, vi-inspired command string against a single
//! in-memory text buffer.
//!
//! ## Philosophy
//!
//! - **Parse, then run**: A command string is tokenized completely before
//!   the buffer is touched, so a malformed string never leaves a
//!   half-edited buffer behind
//! - **Deterministic**: Same text + same command string => same final state
//! - **No runtime failures**: Every command is total over its input domain
//!   (clamping, early stop, no-op), only parsing can fail
//! - **Explicit state**: The engine owns cursor, text and history; nothing
//!   is global
//!
//! ## Design
//!
//! The core provides:
//! - CommandParser: `[<digits>]<letter>[<arg>]` tokenizer producing `Command`s
//! - Engine: buffer state machine with a snapshot-per-command undo stack
//! - Editor: construct-and-run facade (parse everything, then run everything)
//! - EditorConfig: typed configuration with defaults
//!
//! ## Known limitation
//!
//! Every non-undo command pushes a full copy of the text onto the history
//! stack. Memory grows with `commands × text length`; `HistoryConfig::limit`
//! bounds it when that matters.

pub mod buffer;
pub mod command;
pub mod config;
pub mod count;
pub mod editor;
pub mod engine;
pub mod error;
pub mod history;
pub mod parser;
pub mod snapshot;

pub use buffer::TextBuffer;
pub use command::Command;
pub use config::{EditorConfig, HistoryConfig, ParserConfig};
pub use count::Count;
pub use editor::Editor;
pub use engine::Engine;
pub use error::{ConfigError, ParseError, ParseErrorKind};
pub use history::History;
pub use parser::{parse_commands, CommandParser};
pub use snapshot::Snapshot;
