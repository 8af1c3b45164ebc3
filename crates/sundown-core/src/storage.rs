//! File helpers shared by the JSON-backed stores.
//!
//! All functions here are synchronous and are meant to run on tokio's
//! blocking pool through [`run_blocking`].

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tokio::task;

use crate::error::{FsResultExt, Result, ResultExt};

/// Runs a blocking closure on the blocking pool and flattens the join error.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .with_context("Task join error")?
}

/// Creates the parent directory of `path` if it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).fs_context(parent)
        }
        _ => Ok(()),
    }
}

/// Reads and parses a JSON file. A missing file is `Ok(None)`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).fs_context(path),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Serializes `value` as pretty JSON and replaces `path` in one rename, so a
/// reader never sees a half-written file.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    let staging = staging_path(path);
    fs::write(&staging, json).fs_context(&staging)?;
    fs::rename(&staging, path).fs_context(path)
}

/// Deletes `path`; an already missing file is not an error.
pub(crate) fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e).fs_context(path),
        _ => Ok(()),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
