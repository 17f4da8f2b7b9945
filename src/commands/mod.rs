//! Command handlers for the expense-tracker CLI.
//!
//! Each command loads the whole record set from a `Store`, does its work, saves if it changed
//! anything, and returns an `Out` describing the outcome. Commands never print. `run` routes a
//! parsed command line to its handler and returns the text for stdout.

mod add;
mod delete;
mod list;
mod summary;

use crate::args::{Args, Command, COMMANDS};
use crate::clock::Clock;
use crate::store::Store;
use crate::Result;
use clap::CommandFactory;
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use add::add;
pub use delete::delete;
pub use list::{list, HEADER};
pub use summary::{summary, Summary};

/// The output type for a command: a message for the user and, optionally, structured data about
/// what happened.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Log the structured data (if it exists) as JSON to `debug!` and return the message.
    pub fn into_message(self) -> String {
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
        self.message
    }
}

/// Runs the parsed `command` against `store` and returns the text to print on stdout.
///
/// Without a command the usage text is returned. A command that is not one of `COMMANDS` is named
/// back to the user along with the list of commands. Neither touches the store.
pub fn run(store: &dyn Store, clock: &dyn Clock, command: Option<&Command>) -> Result<String> {
    let text = match command {
        None => usage(),
        Some(Command::Add(args)) => add(store, clock, args.clone())?.into_message(),
        Some(Command::List(_)) => list(store)?.into_message(),
        Some(Command::Delete(args)) => delete(store, args.clone())?.into_message(),
        Some(Command::Summary(args)) => summary(store, clock, args.clone())?.into_message(),
        Some(Command::Unknown(words)) => {
            let name = words.first().map(String::as_str).unwrap_or_default();
            format!("Unknown command: {name}\nCommands: {}", COMMANDS.join(", "))
        }
    };
    Ok(text)
}

/// The generated help text, which lists the commands and the global options.
pub fn usage() -> String {
    <Args as CommandFactory>::command()
        .render_help()
        .to_string()
        .trim_end()
        .to_string()
}
