// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The commands understood by the bot, and the dispatch from a message to
//! the command which handles it.

#[cfg(feature = "ping")]
pub mod ping;
#[cfg(feature = "shutdown")]
pub mod shutdown;

use serenity::client::Context;
use serenity::model::channel::Message;
use std::fmt;
use std::result::Result as StdResult;

/// The outcome of a command; the error is a user-facing message which is sent
/// back to the channel the command came from.
pub type CommandResult = StdResult<(), String>;

/// A command recognised by the dispatcher.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Replies with "pong".
    #[cfg(feature = "ping")]
    Ping,
    /// Disconnects the bot. Administrators only.
    #[cfg(feature = "shutdown")]
    Shutdown,
}

impl Command {
    /// Looks up a command by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Command> {
        match name.to_lowercase().as_str() {
            #[cfg(feature = "ping")]
            "ping" => Some(Command::Ping),
            #[cfg(feature = "shutdown")]
            "shutdown" => Some(Command::Shutdown),
            _ => None,
        }
    }

    /// Extracts the command from `content` if it starts with `prefix`.
    ///
    /// The command name is the word directly after the prefix; anything
    /// following it is ignored.
    pub fn parse(content: &str, prefix: &str) -> Option<Command> {
        let rest = content.strip_prefix(prefix)?;
        let name = rest.split(char::is_whitespace).next().filter(|name| !name.is_empty())?;

        Command::from_name(name)
    }

    /// The canonical name of the command.
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "ping")]
            Command::Ping => "ping",
            #[cfg(feature = "shutdown")]
            Command::Shutdown => "shutdown",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `command` in response to `message`.
pub async fn dispatch(context: &Context, message: &Message, command: Command) -> CommandResult {
    match command {
        #[cfg(feature = "ping")]
        Command::Ping => ping::ping(context, message).await,
        #[cfg(feature = "shutdown")]
        Command::Shutdown => shutdown::shutdown(context, message).await,
    }
}
