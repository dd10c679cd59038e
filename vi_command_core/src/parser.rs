//! Command string parsing
//!
//! Grammar: `([<digits>]<letter>[<arg>])*` where `<letter>` is one of
//! `h l x u r f`. `r` and `f` take the next character verbatim as their
//! argument. Digits default the count to 1; a digit run too large for
//! `ParserConfig::max_count` becomes `Count::Unbounded`.

use log::debug;

use crate::command::Command;
use crate::config::ParserConfig;
use crate::count::Count;
use crate::error::ParseError;

/// Command string parser
#[derive(Debug, Clone, Default)]
pub struct CommandParser {
    config: ParserConfig,
}

impl CommandParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Tokenize a whole command string
    ///
    /// Fails on the first bad letter; nothing is returned for the part
    /// already parsed.
    pub fn parse(&self, input: &str) -> Result<Vec<Command>, ParseError> {
        let mut commands = Vec::new();
        let mut digits = String::new();
        let mut chars = input.chars().enumerate();

        while let Some((offset, ch)) = chars.next() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }

            let count = self.resolve_count(&digits);
            digits.clear();

            let command = match ch {
                'h' => Command::MoveLeft(count),
                'l' => Command::MoveRight(count),
                'x' => Command::Delete(count),
                'u' => Command::Undo(count),
                'r' => Command::Replace(count, Self::argument(&mut chars, ch, offset)?),
                // counts are accepted before `f` but have no effect
                'f' => Command::MoveToNext(Self::argument(&mut chars, ch, offset)?),
                _ => return Err(ParseError::UnsupportedCommand { command: ch, offset }),
            };
            commands.push(command);
        }

        debug!("parsed {} command(s) from {:?}", commands.len(), input);
        Ok(commands)
    }

    /// Turn an accumulated digit run into a count
    fn resolve_count(&self, digits: &str) -> Count {
        if digits.is_empty() {
            return Count::ONE;
        }

        match digits.parse::<usize>() {
            Ok(n) if n <= self.config.max_count => Count::Times(n),
            _ => Count::Unbounded,
        }
    }

    fn argument(
        chars: &mut impl Iterator<Item = (usize, char)>,
        command: char,
        offset: usize,
    ) -> Result<char, ParseError> {
        chars
            .next()
            .map(|(_, arg)| arg)
            .ok_or(ParseError::MissingArgument { command, offset })
    }
}

/// Parse with the default configuration
pub fn parse_commands(input: &str) -> Result<Vec<Command>, ParseError> {
    CommandParser::default().parse(input)
}
