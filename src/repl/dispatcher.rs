//! Line dispatch: tokenize, resolve, run, render.

use crate::book::AddressBook;
use crate::commands::{self, CommandContext};
use crate::config::Config;
use crate::error::CommandError;
use tracing::{debug, warn};

/// Whether the REPL keeps reading after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// What to print for one input line, and whether to stop afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub control: Control,
}

impl Reply {
    fn new(output: String, control: Control) -> Self {
        Self { output, control }
    }
}

/// Owns the session's address book and turns input lines into replies.
///
/// Handler errors never escape: they are rendered as the reply text and
/// the session continues.
#[derive(Debug, Default)]
pub struct ContactBot {
    book: AddressBook,
    config: Config,
}

impl ContactBot {
    pub fn new(config: Config) -> Self {
        Self {
            book: AddressBook::new(),
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one raw input line.
    ///
    /// The line is lowercased and split on whitespace. Blank input yields an
    /// empty reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let normalized = line.trim().to_lowercase();
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return Reply::new(String::new(), Control::Continue);
        }

        let Some((spec, args)) = commands::resolve(&tokens) else {
            let err = CommandError::UnknownCommand(normalized.clone());
            warn!(input = %normalized, "Unknown command");
            return Reply::new(err.to_string(), Control::Continue);
        };

        debug!(command = spec.name, args = args.len(), "Dispatching command");

        let mut ctx = CommandContext {
            book: &mut self.book,
            config: &self.config,
            usage: spec.usage,
        };
        match (spec.handler)(&mut ctx, args) {
            Ok(output) => {
                let control = if spec.exits {
                    Control::Exit
                } else {
                    Control::Continue
                };
                Reply::new(output, control)
            }
            Err(err) => {
                warn!(command = spec.name, error = %err, "Command rejected");
                Reply::new(err.to_string(), Control::Continue)
            }
        }
    }
}
