use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole document as UTF-8 text.
pub fn load(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {:?}", path))
}

/// Write the document back atomically: temp file in the target's directory,
/// then rename over the target, so a crash mid-write cannot truncate it.
pub fn persist(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

    tmp.write_all(text.as_bytes())
        .with_context(|| format!("Failed to write document: {:?}", path))?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace document: {:?}", path))?;

    Ok(())
}
