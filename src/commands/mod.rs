// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Command parsing for the interactive session.
//!
//! Each input line is split on whitespace. The first field names the command
//! (matched case-insensitively); the remaining fields are its arguments.
//! Optional numeric arguments are read from their leading integer (`12abc`
//! is 12); arguments without one keep their defaults.

use std::path::PathBuf;

use crate::data_structures::prefix_index::{DEFAULT_FREQUENCY, DEFAULT_LIMIT};
use crate::error::command::CommandError;
use crate::loader::leading_integer;

/// Usage line for `add`.
pub const ADD_USAGE: &str = "add <word> [freq]";
/// Usage line for `search`.
pub const SEARCH_USAGE: &str = "search <word>";
/// Usage line for `predict`.
pub const PREDICT_USAGE: &str = "predict <prefix> [n]";
/// Usage line for `load`.
pub const LOAD_USAGE: &str = "load <filename>";

/// Help text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  add <word> [freq]      - insert a word (freq default 1)
  predict <prefix> [n]   - show top n predictions (default 10)
  search <word>          - check if exact word exists
  load <filename>        - load words from file (word [freq] per line)
  test                   - run built-in self test
  exit                   - quit
  help                   - this message
";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a word, accumulating its frequency
    Add {
        /// Word to insert
        word: String,
        /// Increment to apply
        frequency: i64,
    },

    /// Check whether a complete word is present
    Search {
        /// Word to look up
        word: String,
    },

    /// Show ranked completions of a prefix
    Predict {
        /// Prefix to complete
        prefix: String,
        /// Maximum number of completions
        limit: usize,
    },

    /// Bulk load a word list
    Load {
        /// Path of the word list
        path: PathBuf,
    },

    /// Print the command summary
    Help,

    /// End the session
    Exit,

    /// Run the built-in self test
    SelfTest,

    /// Anything else; carries the command name as typed
    Unknown(String),
}

/// Turns input lines into [`Command`]s.
#[derive(Debug, Clone)]
pub struct CommandParser {
    default_limit: usize,
    lowercase_input: bool,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, true)
    }
}

impl CommandParser {
    /// Creates a parser.
    ///
    /// # Arguments
    ///
    /// * `default_limit` - Limit used when `predict` gets no valid count.
    /// * `lowercase_input` - Whether words and prefixes are ASCII-lowercased.
    pub fn new(default_limit: usize, lowercase_input: bool) -> Self {
        Self {
            default_limit,
            lowercase_input,
        }
    }

    /// Parses one input line.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The line was blank.
    /// * `Ok(Some(Command))` - A command, possibly [`Command::Unknown`].
    /// * `Err(CommandError)` - A known command was missing a required argument.
    pub fn parse(&self, line: &str) -> Result<Option<Command>, CommandError> {
        let mut fields = line.split_whitespace();
        let name = match fields.next() {
            Some(name) => name.to_ascii_lowercase(),
            None => return Ok(None),
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            "test" => Command::SelfTest,
            "add" => {
                let word = self.required_word(fields.next(), ADD_USAGE)?;
                let frequency = parse_or(fields.next(), DEFAULT_FREQUENCY);
                Command::Add { word, frequency }
            }
            "search" => Command::Search {
                word: self.required_word(fields.next(), SEARCH_USAGE)?,
            },
            "predict" => {
                let prefix = self.required_word(fields.next(), PREDICT_USAGE)?;
                let limit = parse_or(fields.next(), self.default_limit);
                Command::Predict { prefix, limit }
            }
            "load" => {
                let path = fields
                    .next()
                    .ok_or(CommandError::MissingArgument { usage: LOAD_USAGE })?;
                Command::Load {
                    path: PathBuf::from(path),
                }
            }
            _ => Command::Unknown(name),
        };

        Ok(Some(command))
    }

    fn required_word(
        &self,
        field: Option<&str>,
        usage: &'static str,
    ) -> Result<String, CommandError> {
        let mut word = field
            .ok_or(CommandError::MissingArgument { usage })?
            .to_string();
        if self.lowercase_input {
            word.make_ascii_lowercase();
        }
        Ok(word)
    }
}

fn parse_or<T: std::str::FromStr>(field: Option<&str>, default: T) -> T {
    field.and_then(leading_integer).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        CommandParser::default().parse(line)
    }

    #[test_case("add Apple", Command::Add { word: "apple".into(), frequency: 1 } ; "add default frequency")]
    #[test_case("ADD pear 7", Command::Add { word: "pear".into(), frequency: 7 } ; "add uppercase command")]
    #[test_case("add plum many", Command::Add { word: "plum".into(), frequency: 1 } ; "add bad frequency")]
    #[test_case("add w 12abc", Command::Add { word: "w".into(), frequency: 12 } ; "add leading digits")]
    #[test_case("add fig -2", Command::Add { word: "fig".into(), frequency: -2 } ; "add negative frequency")]
    #[test_case("search CAR", Command::Search { word: "car".into() } ; "search lowercases")]
    #[test_case("predict ca", Command::Predict { prefix: "ca".into(), limit: 10 } ; "predict default limit")]
    #[test_case("predict ca 3", Command::Predict { prefix: "ca".into(), limit: 3 } ; "predict explicit limit")]
    #[test_case("predict ca 3rd", Command::Predict { prefix: "ca".into(), limit: 3 } ; "predict leading digits")]
    #[test_case("predict ca -3", Command::Predict { prefix: "ca".into(), limit: 10 } ; "predict bad limit")]
    #[test_case("load Words.TXT", Command::Load { path: PathBuf::from("Words.TXT") } ; "load keeps case")]
    #[test_case("help", Command::Help ; "help")]
    #[test_case("exit", Command::Exit ; "exit")]
    #[test_case("Quit", Command::Exit ; "quit")]
    #[test_case("test", Command::SelfTest ; "self test")]
    #[test_case("frobnicate now", Command::Unknown("frobnicate".into()) ; "unknown")]
    fn test_parse_commands(line: &str, expected: Command) {
        assert_eq!(parse(line), Ok(Some(expected)));
    }

    #[test_case("add", ADD_USAGE ; "add")]
    #[test_case("search   ", SEARCH_USAGE ; "search")]
    #[test_case("predict", PREDICT_USAGE ; "predict")]
    #[test_case("load", LOAD_USAGE ; "load")]
    fn test_missing_arguments(line: &str, usage: &'static str) {
        assert_eq!(parse(line), Err(CommandError::MissingArgument { usage }));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t "), Ok(None));
    }

    #[test]
    fn test_parser_settings() {
        let parser = CommandParser::new(4, false);
        assert_eq!(
            parser.parse("predict Ca"),
            Ok(Some(Command::Predict {
                prefix: "Ca".into(),
                limit: 4
            }))
        );
    }

    #[test]
    fn test_usage_message() {
        let err = CommandError::MissingArgument { usage: ADD_USAGE };
        assert_eq!(err.to_string(), "Usage: add <word> [freq]");
        assert_eq!(err.usage(), ADD_USAGE);
    }
}
