// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Locates, validates and, on first run, creates the configuration file.
//!
//! Nothing in here terminates the process: every failure is returned as an
//! `Error` and left to the caller to report.

use crate::config::{Config, PRODUCT_NAME};
use crate::error::{Error, Result};
use serde_json::{self, Value};
use std::env;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Selects which checks `Bootstrapper::load` applies after the identity check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// The configuration is only inspected, e.g. dumped to the console.
    Inspect,
    /// The configuration will start a bot session and must hold a token.
    Session,
}

/// A validated configuration together with the file it was read from.
#[derive(Clone, Debug)]
pub struct LoadedConfig {
    /// The resolved location of the configuration file.
    pub path: PathBuf,
    /// The validated record.
    pub config: Config,
    /// Whether the file was created by this load.
    pub created: bool,
}

/// Loads or creates the configuration file for one invocation.
#[derive(Clone, Debug)]
pub struct Bootstrapper {
    install_dir: PathBuf,
    mode: Mode,
}

impl Bootstrapper {
    /// Returns a bootstrapper which resolves bare file names against
    /// `install_dir`.
    pub fn new<P: Into<PathBuf>>(install_dir: P, mode: Mode) -> Self {
        Bootstrapper {
            install_dir: install_dir.into(),
            mode,
        }
    }

    /// Returns a bootstrapper rooted at the directory of the running
    /// executable.
    pub fn from_current_exe(mode: Mode) -> Result<Self> {
        let exe = env::current_exe().map_err(Error::InstallDir)?;
        let install_dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            Error::InstallDir(io::Error::new(
                ErrorKind::NotFound,
                "the executable has no parent directory",
            ))
        })?;
        debug!("Installation directory: {}", install_dir.display());

        Ok(Bootstrapper::new(install_dir, mode))
    }

    /// Resolves a user-supplied configuration path.
    ///
    /// A bare file name lands in the installation directory; anything with a
    /// directory component is returned unchanged.
    pub fn resolve(&self, file: &Path) -> PathBuf {
        if has_directory(file) {
            file.to_path_buf()
        } else {
            self.install_dir.join(file)
        }
    }

    /// Loads the configuration at `file`, creating a default one if there is
    /// no readable file there.
    pub fn load(&self, file: &Path) -> Result<LoadedConfig> {
        let path = self.resolve(file);
        check_directory(containing_dir(&path))?;

        let (config, created) = match fs::read(&path) {
            Ok(bytes) => {
                let config = parse(&path, &bytes)?;
                info!("Loaded config from: \"{}\"", path.display());
                (config, false)
            },
            Err(ref err) if is_missing_or_unreadable(err) => {
                debug!("No readable config at \"{}\": {}", path.display(), err);
                (create_default(&path)?, true)
            },
            Err(source) => return Err(Error::Read { path, source }),
        };

        // Only a session reads typed values; inspection takes the record as is.
        if self.mode == Mode::Session {
            config.credential()?;
            config.command_prefix()?;
        }

        Ok(LoadedConfig {
            path,
            config,
            created,
        })
    }
}

/// Returns the directory holding `path`, treating an empty or blank
/// directory as the current one.
pub fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !is_blank(dir) => dir,
        _ => Path::new("."),
    }
}

/// Verifies that `dir` can be both listed and written to.
pub fn check_directory(dir: &Path) -> Result<()> {
    let readable = fs::read_dir(dir).is_ok();
    // An anonymous temporary file is removed again as soon as it is dropped.
    let writable = readable && tempfile::tempfile_in(dir).is_ok();
    trace!("Directory {}: readable={}, writable={}", dir.display(), readable, writable);

    if readable && writable {
        Ok(())
    } else {
        Err(Error::Permission { directory: dir.to_path_buf() })
    }
}

fn has_directory(file: &Path) -> bool {
    file.is_absolute() || file.parent().map_or(false, |dir| !dir.as_os_str().is_empty())
}

fn is_blank(dir: &Path) -> bool {
    dir.to_str().map_or(false, |dir| dir.trim().is_empty())
}

fn is_missing_or_unreadable(err: &io::Error) -> bool {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => true,
        _ => false,
    }
}

// Only `name` is checked here; every other value is kept exactly as read.
fn parse(path: &Path, bytes: &[u8]) -> Result<Config> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let config = match value {
        Value::Object(values) => Config::from(values),
        _ => return Err(Error::IdentityMismatch { expected: PRODUCT_NAME }),
    };
    if config.name() != Some(PRODUCT_NAME) {
        return Err(Error::IdentityMismatch { expected: PRODUCT_NAME });
    }

    Ok(config)
}

fn create_default(path: &Path) -> Result<Config> {
    let config = Config::default();
    let contents = config.to_pretty_string()?;
    fs::write(path, contents).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Created default config at: \"{}\"", path.display());

    Ok(config)
}
