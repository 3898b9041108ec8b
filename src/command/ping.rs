// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::command::CommandResult;
use crate::util::say;
use serenity::client::Context;
use serenity::model::channel::Message;

/// Replies with "pong".
pub async fn ping(context: &Context, message: &Message) -> CommandResult {
    say(context, message, "pong").await;
    Ok(())
}
