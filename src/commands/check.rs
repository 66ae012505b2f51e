use std::path::Path;

use anyhow::Result;

use blueprint::config::Config;
use blueprint::presentation::output::{self, Icons};
use blueprint::presentation::{compile_options, create_compile_use_case};

pub fn cmd_check(manifest: &Path, config: &Config, json: bool) -> Result<()> {
    let use_case = create_compile_use_case(config)?;
    let result = use_case.execute(manifest, &compile_options(config))?;

    if json {
        output::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "manifest": manifest.display().to_string(),
            "ok": true,
            "summary": result.summary,
        }))?;
    } else {
        println!(
            "{}",
            output::render_check(Icons::detect(), manifest, &result.summary)
        );
    }
    Ok(())
}
