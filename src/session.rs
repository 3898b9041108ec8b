// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs the bot against Discord using a validated configuration.

use crate::bootstrap::LoadedConfig;
use crate::command::{self, Command};
use crate::config;
use crate::counter::{self, CommandCounter};
use crate::error::Result;
use crate::util::say;
use serenity::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::gateway::GatewayIntents;
use std::collections::HashMap;

#[cfg(feature = "shutdown")]
use crate::command::shutdown::ShardManagerContainer;

struct Handler {
    prefix: String,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _context: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, context: Context, message: Message) {
        if message.author.bot {
            return;
        }

        let command = match Command::parse(&message.content, &self.prefix) {
            Some(command) => command,
            None => {
                trace!("Ignoring message without a command: {}", message.content);
                return;
            },
        };
        debug!("Received command: {}", command);

        if let Err(why) = command::dispatch(&context, &message, command).await {
            debug!("Command '{}' failed: {}", command, why);
            say(&context, &message, &why).await;
            return;
        }

        let uses = counter::record(&context, command).await;
        debug!("Command '{}' was invoked by {} ({} uses)", command, message.author.tag(), uses);
    }
}

/// Connects to Discord and serves commands until the bot is shut down.
///
/// Once the client stops, the active configuration is written back to the
/// file it came from; a failure to do so is logged and otherwise ignored.
pub async fn run(loaded: LoadedConfig) -> Result<()> {
    let token = loaded.config.credential()?;
    let prefix = loaded.config.command_prefix()?.to_owned();
    debug!("Using command prefix: {}", prefix);

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(token, intents)
        .event_handler(Handler { prefix })
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<CommandCounter>(HashMap::new());
        #[cfg(feature = "shutdown")]
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
    }

    client.start().await?;
    info!("Disconnected from Discord");

    if let Err(err) = config::save(&loaded.config, &loaded.path) {
        error!("{}", err);
    }

    Ok(())
}
