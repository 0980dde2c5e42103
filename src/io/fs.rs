//! Filesystem helpers shared by the init workflow.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Existence check that never errors; any access failure counts as absent.
pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Serialize `value` as pretty-printed JSON (2-space indent, trailing
/// newline) and overwrite `path` unconditionally.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
    payload.push('\n');
    fs::write(path, payload).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

/// Write `contents` only when `path` does not exist yet.
///
/// Returns whether it actually wrote; `false` means an existing file was left
/// untouched. This is the idempotence primitive for generated config files.
pub fn write_file_if_missing(path: &Path, contents: &str) -> Result<bool> {
    if exists(path) {
        debug!(path = %path.display(), "file exists, skipping");
        return Ok(false);
    }
    write_file(path, contents)?;
    Ok(true)
}

/// Unconditional overwrite, used for hook scripts which are regenerated every
/// run to stay in sync with the expected invocation pattern.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// Best-effort executable bit. Errors are swallowed (non-fatal) and the call
/// is a no-op on platforms without a unix permission model.
#[cfg(unix)]
pub fn chmod_safe(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o755)) {
        debug!(path = %path.display(), err = %err, "chmod failed, ignoring");
    }
}

#[cfg(not(unix))]
pub fn chmod_safe(_path: &Path) {}
