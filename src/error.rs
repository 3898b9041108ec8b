// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;
use thiserror::Error;

/// A convenient alias type for results for `pandoric`.
pub type Result<T> = StdResult<T, Error>;

/// Represents errors which occur while bootstrapping or running Pandoric.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory holding the configuration file is not both readable and
    /// writable.
    #[error("The directory \"{}\" cannot be read from or written to. Please check your permissions.",
            .directory.display())]
    Permission {
        /// The directory which failed the access check.
        directory: PathBuf,
    },
    /// The configuration file exists but does not contain valid JSON.
    #[error("The file \"{}\" is not a valid JSON file. Please specify a valid JSON file.",
            .path.display())]
    Malformed {
        /// The offending file.
        path: PathBuf,
        /// The parser error.
        #[source]
        source: serde_json::Error,
    },
    /// The `name` field is absent or does not match the product identifier.
    #[error("The configuration file is invalid. The \"name\" variable must match \"{expected}\".")]
    IdentityMismatch {
        /// The identifier every configuration file must carry.
        expected: &'static str,
    },
    /// A field the bot session reads holds the wrong kind of JSON value.
    #[error("The configuration value \"{field}\" must be {expected} to start the bot.")]
    InvalidField {
        /// The name of the offending field.
        field: &'static str,
        /// What the field should hold.
        expected: &'static str,
    },
    /// A session was requested but the configuration holds no bot token.
    #[error("The configuration file does not contain a \"{field}\" value, which is required to \
             start the bot.")]
    MissingCredential {
        /// The name of the missing field.
        field: &'static str,
    },
    /// The default configuration file could not be written.
    #[error("Error creating the configuration file \"{}\": {source}", .path.display())]
    Create {
        /// The file which could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The configuration file exists but could not be read.
    #[error("Error reading the configuration file \"{}\": {source}", .path.display())]
    Read {
        /// The file which could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// An explicit save of the active configuration failed.
    #[error("Error saving configuration to \"{}\": {source}", .path.display())]
    Save {
        /// The file which could not be written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The directory of the running executable could not be determined.
    #[error("Unable to determine the installation directory: {0}")]
    InstallDir(#[source] io::Error),
    /// An IO error was encountered.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A `serde_json` crate error.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// A `serenity` crate error.
    #[error(transparent)]
    Serenity(#[from] serenity::Error),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use super::Error;

    #[test]
    fn test_messages_name_the_offending_item() {
        let err = Error::Permission { directory: PathBuf::from("/srv/bot") };
        assert!(err.to_string().contains("\"/srv/bot\""));

        let err = Error::IdentityMismatch { expected: "Pandoric Interface for Discord" };
        assert_eq!(
            err.to_string(),
            "The configuration file is invalid. The \"name\" variable must match \
             \"Pandoric Interface for Discord\"."
        );

        let err = Error::MissingCredential { field: "discord_token" };
        assert!(err.to_string().contains("\"discord_token\""));

        let err = Error::InvalidField { field: "command_prefix", expected: "a string" };
        assert_eq!(
            err.to_string(),
            "The configuration value \"command_prefix\" must be a string to start the bot."
        );
    }
}
