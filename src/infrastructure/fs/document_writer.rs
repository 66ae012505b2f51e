//! Atomic document output

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::BlueprintResult;

/// Write `content` to `path` atomically
///
/// The content goes to a temporary file in the destination directory which
/// is then renamed over `path`, so readers never observe a partial file.
pub fn write_atomic(path: &Path, content: &str) -> BlueprintResult<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
