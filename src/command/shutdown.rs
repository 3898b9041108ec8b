// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides functionality for the `shutdown` command.

use crate::command::CommandResult;
use crate::util::{say, INTERNAL_ERROR};
use serenity::client::Context;
use serenity::gateway::ShardManager;
use serenity::model::channel::Message;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// Gives commands access to the client's shard manager.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Disconnects every shard once an administrator asks for it.
pub async fn shutdown(context: &Context, message: &Message) -> CommandResult {
    if !is_administrator(context, message).await {
        return Err("You do not have permission to do that.".to_owned());
    }

    let shard_manager = {
        let data = context.data.read().await;
        data.get::<ShardManagerContainer>().cloned()
    };
    let shard_manager = match shard_manager {
        Some(shard_manager) => shard_manager,
        None => {
            error!("Shard manager missing from the client data");
            return Err(INTERNAL_ERROR.to_owned());
        },
    };

    say(context, message, "Shutting down now.").await;
    info!("Shutdown requested by {}", message.author.tag());
    shard_manager.shutdown_all().await;

    Ok(())
}

// Direct messages carry no guild permissions, so they never qualify.
async fn is_administrator(context: &Context, message: &Message) -> bool {
    let guild_id = match message.guild_id {
        Some(guild_id) => guild_id,
        None => return false,
    };
    let member = match guild_id.member(context, message.author.id).await {
        Ok(member) => member,
        Err(why) => {
            warn!("Failed to look up member {}: {:?}", message.author.id, why);
            return false;
        },
    };

    context.cache
        .guild(guild_id)
        .map_or(false, |guild| guild.member_permissions(&member).administrator())
}
