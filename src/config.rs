// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The configuration record and its on-disk JSON form.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The identifier every configuration file must carry in its `name` field.
pub const PRODUCT_NAME: &str = "Pandoric Interface for Discord";

/// The version written into freshly created configuration files.
pub const VERSION: &str = "v0.0 Conceptual Version";

/// The field holding the product identifier.
pub const NAME_FIELD: &str = "name";

/// The field holding the informational version string.
pub const VERSION_FIELD: &str = "version";

/// The field holding the bot token.
pub const CREDENTIAL_FIELD: &str = "discord_token";

/// The field holding the command prefix.
pub const PREFIX_FIELD: &str = "command_prefix";

/// The command prefix used when the configuration does not set one.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

const INDENT: &[u8] = b"    ";

/// The configuration record loaded from, and saved to, the JSON file.
///
/// The whole JSON object is kept as read, whatever its values look like;
/// typed access happens only through the accessors below.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Config {
    values: Map<String, Value>,
}

impl Config {
    /// The `name` field, if it holds a string.
    pub fn name(&self) -> Option<&str> {
        self.values.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Returns the bot token.
    ///
    /// Fails when the field is absent, or present with anything but a string.
    pub fn credential(&self) -> Result<&str> {
        match self.values.get(CREDENTIAL_FIELD) {
            None => Err(Error::MissingCredential { field: CREDENTIAL_FIELD }),
            Some(value) => value.as_str().ok_or(Error::InvalidField {
                field: CREDENTIAL_FIELD,
                expected: "a string",
            }),
        }
    }

    /// Returns the configured command prefix, falling back to
    /// `DEFAULT_COMMAND_PREFIX` when the field is absent.
    pub fn command_prefix(&self) -> Result<&str> {
        match self.values.get(PREFIX_FIELD) {
            None => Ok(DEFAULT_COMMAND_PREFIX),
            Some(value) => value.as_str().ok_or(Error::InvalidField {
                field: PREFIX_FIELD,
                expected: "a string",
            }),
        }
    }

    /// Serializes the record as JSON indented by four spaces.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        {
            let formatter = PrettyFormatter::with_indent(INDENT);
            let mut serializer = Serializer::with_formatter(&mut buf, formatter);
            self.serialize(&mut serializer)?;
        }
        // `serde_json` only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<Map<String, Value>> for Config {
    fn from(values: Map<String, Value>) -> Config {
        Config { values }
    }
}

impl Default for Config {
    fn default() -> Config {
        let mut values = Map::new();
        values.insert(NAME_FIELD.to_owned(), Value::from(PRODUCT_NAME));
        values.insert(VERSION_FIELD.to_owned(), Value::from(VERSION));
        Config { values }
    }
}

/// Writes `config` to `path`, replacing whatever is there.
///
/// The record is written to a temporary file next to `path` which is then
/// renamed over it, so a failed save never leaves a truncated file behind.
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let save_err = |source: io::Error| Error::Save { path: path.to_owned(), source };

    let contents = config.to_pretty_string()?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(&save_err)?;
    temp.write_all(contents.as_bytes()).map_err(&save_err)?;
    temp.persist(path).map_err(|err| save_err(err.error))?;

    debug!("Configuration saved successfully to {}", path.display());
    Ok(())
}
