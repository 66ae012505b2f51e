use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use blueprint::config::Config;
use blueprint::infrastructure::write_atomic;
use blueprint::presentation::output::{self, Icons};
use blueprint::presentation::{compile_options, create_compile_use_case};

pub fn cmd_compile(
    manifest: &Path,
    output_path: Option<&Path>,
    compact: bool,
    config: &Config,
    json: bool,
) -> Result<()> {
    if json {
        output::emit(serde_json::json!({
            "event": "start",
            "command": "compile",
            "manifest": manifest.display().to_string(),
        }))?;
    }

    let use_case = create_compile_use_case(config)?;
    let result = use_case.execute(manifest, &compile_options(config))?;

    let pretty = config.output.pretty && !compact;
    let mut rendered = if pretty {
        result.document.to_json_pretty()?
    } else {
        result.document.to_json()?
    };
    rendered.push('\n');

    match output_path {
        Some(path) => {
            write_atomic(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if json {
                output::emit(serde_json::json!({
                    "event": "complete",
                    "command": "compile",
                    "output": path.display().to_string(),
                    "summary": result.summary,
                }))?;
            } else {
                println!(
                    "{}",
                    output::render_compiled(Icons::detect(), manifest, path, &result.summary)
                );
            }
        }
        None if json => {
            output::emit(serde_json::json!({
                "event": "complete",
                "command": "compile",
                "document": result.document,
                "summary": result.summary,
            }))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
