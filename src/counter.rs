// Copyright (c) 2024 The pandoric contributors
// See the README.md file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::command::Command;
use serenity::client::Context;
use serenity::prelude::TypeMapKey;
use std::collections::HashMap;

/// Counts completed invocations per command name.
pub struct CommandCounter;

impl TypeMapKey for CommandCounter {
    type Value = HashMap<String, u64>;
}

/// Records a completed invocation of `command`, returning its new total.
pub async fn record(context: &Context, command: Command) -> u64 {
    let mut data = context.data.write().await;
    match data.get_mut::<CommandCounter>() {
        Some(counter) => bump(counter, command.name()),
        None => {
            let mut counter = HashMap::new();
            let uses = bump(&mut counter, command.name());
            data.insert::<CommandCounter>(counter);
            uses
        },
    }
}

fn bump(counter: &mut HashMap<String, u64>, name: &str) -> u64 {
    let uses = counter.entry(name.to_owned()).or_insert(0);
    *uses += 1;
    *uses
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::bump;

    #[test]
    fn test_bump() {
        let mut counter = HashMap::new();
        assert_eq!(bump(&mut counter, "ping"), 1);
        assert_eq!(bump(&mut counter, "ping"), 2);
        assert_eq!(bump(&mut counter, "shutdown"), 1);
        assert_eq!(counter["ping"], 2);
    }
}
