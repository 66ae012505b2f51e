use std::path::Path;

use anyhow::Result;

use blueprint::application::inspect_document;
use blueprint::presentation::output;

pub fn cmd_inspect(document: &Path, json: bool) -> Result<()> {
    let result = inspect_document(document)?;

    if json {
        output::emit(serde_json::json!({
            "event": "complete",
            "command": "inspect",
            "document": document.display().to_string(),
            "summary": result.summary,
        }))?;
    } else {
        println!("{}", output::render_summary(&result.summary));
    }
    Ok(())
}
