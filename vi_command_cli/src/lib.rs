//! # vi-command CLI
//!
//! Thin I/O wrapper around `vi_command_core`: read the initial text and a
//! command string, run them, print the final text and cursor.

pub mod error;

use std::io::{Read, Write};
use std::path::PathBuf;

use log::{debug, info};
use vi_command_core::{Editor, EditorConfig};

pub use error::{CliError, GetExitCode, Result};

#[derive(Debug, clap::Parser, Clone, Default)]
#[command(version, about)]
pub struct Args {
    /// Initial text. Read from stdin when neither this nor --text-file is given.
    #[arg(short, long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the initial text from a file
    #[arg(short = 'F', long)]
    pub text_file: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Counts above this value repeat until the buffer runs out
    #[arg(long)]
    pub max_count: Option<usize>,

    /// Maximum number of undo snapshots to keep
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Command string, e.g. `3l2xu`
    pub commands: String,
}

/// Build the effective configuration: defaults, then file, then flags
pub fn load_config(args: &Args) -> Result<EditorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            EditorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => EditorConfig::default(),
    };

    if let Some(max_count) = args.max_count {
        config = config.with_max_count(max_count);
    }
    if let Some(limit) = args.history_limit {
        config = config.with_history_limit(Some(limit));
    }
    config.validate()?;
    Ok(config)
}

fn read_text<STDIN: Read>(args: &Args, mut stdin: STDIN) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let mut text = match &args.text_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Run one editing session and print the result to `stdout`
pub fn run<STDIN: Read, STDOUT: Write>(stdin: STDIN, mut stdout: STDOUT, args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let text = read_text(&args, stdin)?;

    let editor = Editor::with_config(&text, &args.commands, &config)?;
    info!(
        "{} command(s) applied, final cursor {}",
        editor.commands().len(),
        editor.cursor()
    );

    writeln!(stdout, "{}", editor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(commands: &str) -> Args {
        Args {
            commands: commands.to_string(),
            ..Args::default()
        }
    }

    #[test]
    fn test_read_text_strips_one_newline() {
        let text = read_text(&args("l"), "hello\n\n".as_bytes()).unwrap();
        assert_eq!(text, "hello\n");

        let text = read_text(&args("l"), "hello\r\n".as_bytes()).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_text_flag_wins_over_stdin() {
        let mut a = args("l");
        a.text = Some("flag".to_string());
        assert_eq!(read_text(&a, "stdin".as_bytes()).unwrap(), "flag");
    }

    #[test]
    fn test_flag_overrides() {
        let mut a = args("l");
        a.max_count = Some(9);
        a.history_limit = Some(4);
        let config = load_config(&a).unwrap();
        assert_eq!(config.parser.max_count, 9);
        assert_eq!(config.history.limit, Some(4));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut a = args("l");
        a.history_limit = Some(0);
        assert!(matches!(load_config(&a), Err(CliError::Config(_))));
    }
}
