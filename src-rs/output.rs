//! Result sinks shared by both command-line tools.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// Pretty JSON with two-space indent; non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize JSON output")
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create parent directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content).with_context(|| format!("failed to write text: {}", path.display()))
}

/// Writes `content` to `target` when given, printing `"{label} saved to
/// {path}"` to `stdout`; otherwise prints `content` itself.
pub fn emit(stdout: &mut dyn Write, target: Option<&Path>, label: &str, content: &str) -> Result<()> {
    match target {
        Some(path) => {
            write_text_file(path, content)?;
            info!("wrote {} bytes to {}", content.len(), path.display());
            writeln!(stdout, "{label} saved to {}", path.display())?;
        }
        None => writeln!(stdout, "{content}")?,
    }
    Ok(())
}
