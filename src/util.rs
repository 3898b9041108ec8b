// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serenity::client::Context;
use serenity::model::channel::Message;
use serenity::Result as SerenityResult;

/// The reply sent when a command fails for reasons the user cannot fix.
pub const INTERNAL_ERROR: &str = "Error: an internal error occurred, please report this.";

/// Checks that a message successfully sent; if not, then logs why.
#[inline]
pub fn check_msg(result: SerenityResult<Message>) {
    if let Err(why) = result {
        error!("Error sending message: {:?}", why);
    }
}

/// Sends `content` to the channel `message` came from.
pub async fn say(context: &Context, message: &Message, content: &str) {
    let result = message.channel_id.say(&context.http, content).await;
    if result.is_ok() {
        debug!("Sent message: {}", content);
    }
    check_msg(result);
}
