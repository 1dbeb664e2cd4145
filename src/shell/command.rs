//! Line commands understood by the shell.

use std::num::ParseIntError;

use thiserror::Error;

use crate::route::{ParseTabError, Route, TabId};

pub const HELP: &str = "\
commands:
  open <uri>                 resolve a deep link (e.g. app://profile?userId=42)
  push home|settings         push a destination onto the focused tab
  push profile <userId>
  push detail <itemId>
  tab <feed|messages|notifications>
                             focus a tab
  back                       pop the focused tab
  root                       return the focused tab to its root
  show                       print the current state
  log                        print recent transitions
  help                       print this help
  quit                       leave the shell";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Push(Route),
    Tab(TabId),
    Back,
    Root,
    Show,
    Log,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("Unknown destination '{0}' (expected home, settings, profile or detail)")]
    UnknownDestination(String),

    #[error("Invalid item id '{value}': {source}")]
    InvalidItemId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    UnknownTab(#[from] ParseTabError),
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "open" => {
                let [uri] = exactly::<1>(&args, "open", "a URI")?;
                Command::Open(uri.to_string())
            }
            "push" => Command::Push(parse_destination(&args)?),
            "tab" => {
                let [tab] = exactly::<1>(&args, "tab", "a tab name")?;
                Command::Tab(tab.parse()?)
            }
            "back" => no_args(&args, Command::Back)?,
            "root" => no_args(&args, Command::Root)?,
            "show" => no_args(&args, Command::Show)?,
            "log" => no_args(&args, Command::Log)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_destination(args: &[&str]) -> Result<Route, CommandError> {
    let Some((&kind, rest)) = args.split_first() else {
        return Err(CommandError::MissingArgument {
            command: "push",
            argument: "a destination",
        });
    };

    match kind.to_ascii_lowercase().as_str() {
        "home" => no_args(rest, Route::Home),
        "settings" => no_args(rest, Route::Settings),
        "profile" => {
            let [user_id] = exactly::<1>(rest, "push profile", "a user id")?;
            Ok(Route::profile(user_id))
        }
        "detail" => {
            let [raw] = exactly::<1>(rest, "push detail", "an item id")?;
            let item_id = raw.parse().map_err(|source| CommandError::InvalidItemId {
                value: raw.to_string(),
                source,
            })?;
            Ok(Route::detail(item_id))
        }
        other => Err(CommandError::UnknownDestination(other.to_string())),
    }
}

fn exactly<'a, const N: usize>(
    args: &[&'a str],
    command: &'static str,
    argument: &'static str,
) -> Result<[&'a str; N], CommandError> {
    if let Some(extra) = args.get(N) {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }
    args.try_into()
        .map_err(|_| CommandError::MissingArgument { command, argument })
}

fn no_args<T>(args: &[&str], value: T) -> Result<T, CommandError> {
    match args.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_string())),
        None => Ok(value),
    }
}
