use thiserror::Error;
use vi_command_core::{ConfigError, ParseError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid command string: {0}")]
    Parse(#[from] ParseError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Error processing io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait GetExitCode {
    fn get_exit_code(&self) -> i32;
}

impl<T> GetExitCode for Result<T> {
    fn get_exit_code(&self) -> i32 {
        match self {
            Ok(_) => 0,
            Err(CliError::Parse(_)) => 2,
            Err(_) => 1,
        }
    }
}
