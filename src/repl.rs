//! Interactive session over the prefix index.
//!
//! A [`Session`] owns one index for its whole lifetime and applies commands to
//! it. Input and output are generic so the same loop serves a terminal and the
//! tests.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use crate::commands::{Command, CommandParser, HELP_TEXT};
use crate::config::DictConfig;
use crate::data_structures::prefix_index::PrefixIndex;
use crate::error::{DictResult, ErrorContext, ErrorReporter, TracingErrorReporter};
use crate::loader::{lossy_lines, BulkLoader};
use crate::selftest;

/// Banner printed when a session starts.
pub const BANNER: &str = "Trie Autocomplete (type 'help' for commands)";

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the session
    Exit,
}

/// An interactive session owning a single prefix index.
#[derive(Debug)]
pub struct Session {
    index: PrefixIndex,
    parser: CommandParser,
    loader: BulkLoader,
    prompt: String,
    reporter: Arc<dyn ErrorReporter>,
}

impl Session {
    /// Creates a session with an empty index.
    pub fn new(config: &DictConfig) -> Self {
        Self::with_index(PrefixIndex::new(), config)
    }

    /// Creates a session around an existing index.
    pub fn with_index(index: PrefixIndex, config: &DictConfig) -> Self {
        Self {
            index,
            parser: CommandParser::new(config.repl.default_limit, config.repl.lowercase_input),
            loader: BulkLoader::new(config.loader.clone()),
            prompt: config.repl.prompt.clone(),
            reporter: Arc::new(TracingErrorReporter::new()),
        }
    }

    /// Replaces the reporter that receives boundary failures.
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns the session's index.
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Reads commands from `input` until `exit`/`quit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and executed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> DictResult<()> {
        writeln!(out, "{BANNER}")?;

        let mut lines = lossy_lines(input);
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    // Keep the farewell off the prompt line
                    writeln!(out)?;
                    break;
                }
            };
            if self.execute_line(&line, out)? == Flow::Exit {
                break;
            }
        }

        writeln!(out, "Goodbye.")?;
        out.flush()?;
        Ok(())
    }

    /// Parses and executes a single input line.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> DictResult<Flow> {
        match self.parser.parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> DictResult<Flow> {
        match command {
            Command::Help => write!(out, "{HELP_TEXT}")?,
            Command::Exit => return Ok(Flow::Exit),
            Command::Add { word, frequency } => {
                self.index.insert(&word, frequency);
                writeln!(out, "Added: {word} (+{frequency})")?;
            }
            Command::Search { word } => {
                let found = if self.index.contains(&word) {
                    "Found"
                } else {
                    "Not found"
                };
                writeln!(out, "{found}")?;
            }
            Command::Predict { prefix, limit } => {
                let results = self.index.predict(&prefix, limit);
                if results.is_empty() {
                    writeln!(out, "No completions.")?;
                }
                for (rank, prediction) in results.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} (freq={})",
                        rank + 1,
                        prediction.word,
                        prediction.frequency
                    )?;
                }
            }
            Command::Load { path } => self.load(&path, out)?,
            Command::SelfTest => {
                writeln!(out, "=== Running Self Test ===")?;
                let report = selftest::run(out)?;
                writeln!(
                    out,
                    "=== Self Test Complete: {} passed, {} failed ===",
                    report.passed, report.failed
                )?;
            }
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "unknown command");
                writeln!(out, "Unknown command. Type 'help'.")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn load<W: Write>(&mut self, path: &Path, out: &mut W) -> DictResult<()> {
        match self.loader.load_path(&mut self.index, path) {
            Ok(report) => {
                tracing::info!(path = %path.display(), records = report.records, "load complete");
                writeln!(out, "Loaded from {}", path.display())?;
            }
            Err(err) => {
                self.reporter
                    .report(ErrorContext::new(err, "repl").with_details("load command"));
                writeln!(out, "Failed to open {}", path.display())?;
            }
        }
        Ok(())
    }
}
