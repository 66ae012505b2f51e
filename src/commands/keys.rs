use anyhow::Result;

use blueprint::config::Config;
use blueprint::infrastructure::HttpKeySource;
use blueprint::presentation::output;
use blueprint::Context;

pub fn cmd_keys(user: &str, config: &Config, json: bool) -> Result<()> {
    let source = HttpKeySource::from_config(&config.keys)?;
    let keys = Context::global().keys_for_user(&source, user)?;

    if json {
        output::emit(serde_json::json!({
            "event": "complete",
            "command": "keys",
            "user": user,
            "keys": keys,
        }))?;
        return Ok(());
    }

    if keys.is_empty() {
        eprintln!("{} has no public keys", user);
    }
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}
