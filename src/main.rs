// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]
#![deny(non_camel_case_types)]

//! Pandoric Interface for Discord is a small [Discord](https://discord.com/)
//! bot written in [Rust](https://www.rust-lang.org/). It keeps its settings
//! in a single JSON file next to the executable, creating that file on first
//! run, and answers a handful of prefixed commands.

#[macro_use]
extern crate log;

mod bootstrap;
mod command;
mod config;
mod counter;
mod error;
mod session;
mod util;

use bootstrap::{Bootstrapper, Mode};
use clap::Parser;
use error::Result;
use std::path::PathBuf;
use std::process;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(author, version, about = "Pandoric Interface for Discord")]
struct Args {
    /// Enable verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file; a bare file name is looked up next to the executable
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Dump the configuration to the console and exit
    #[arg(short, long)]
    dump: bool,

    /// Validate the configuration for a bot session and exit without connecting
    #[arg(long, conflicts_with = "dump")]
    check: bool,
}

impl Args {
    // Dumping is the only invocation which does not need a bot token.
    fn mode(&self) -> Mode {
        if self.dump {
            Mode::Inspect
        } else {
            Mode::Session
        }
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn main() {
    let args = Args::parse();

    // Initialize the `env_logger` to provide logging output. `RUST_LOG` still
    // takes precedence over the level picked from the flags.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .try_init()
        .ok();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    debug!("Verbose mode enabled");

    let bootstrapper = Bootstrapper::from_current_exe(args.mode())?;
    let loaded = bootstrapper.load(&args.config)?;

    if loaded.created {
        warn!("Created a default configuration at \"{}\"; add a \"{}\" to it before starting \
               the bot", loaded.path.display(), config::CREDENTIAL_FIELD);
    }

    if args.dump {
        println!("{}", loaded.config.to_pretty_string()?);
        return Ok(());
    }

    debug!("Using configuration file: {}", loaded.path.display());

    if args.check {
        info!("Configuration at \"{}\" is ready for a bot session", loaded.path.display());
        return Ok(());
    }

    // The bootstrap above is plain blocking IO; the runtime only exists for
    // the lifetime of the bot session.
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(session::run(loaded))
}
