//! Manifest discovery and loading for host tools.
//!
//! The validation engine never touches the filesystem; this module is what a
//! CLI uses to turn a path into a record.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{PublishableError, Result};

/// Manifest file names, in order of preference.
pub const MANIFEST_NAMES: &[&str] = &["package.json", "package.yaml"];

/// Maximum manifest size accepted by [`read_manifest`] (1 MiB).
pub const MAX_MANIFEST_SIZE: u64 = 1024 * 1024;

/// Locate a manifest in a directory, preferring `package.json`.
#[must_use]
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    MANIFEST_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Resolve a user-supplied path to a manifest file.
///
/// Files are used as-is; directories are searched with [`find_manifest`].
pub fn resolve_manifest(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        if let Some(found) = find_manifest(path) {
            return Ok(found);
        }
    }
    Err(PublishableError::ManifestNotFound {
        path: path.to_path_buf(),
    })
}

/// Read and parse a manifest file.
///
/// `.yaml` and `.yml` files are parsed as YAML, everything else as JSON.
/// The result is not checked for being an object; that is the validator's job.
pub fn read_manifest(path: &Path) -> Result<Value> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_MANIFEST_SIZE {
        return Err(PublishableError::TooLarge {
            path: path.to_path_buf(),
            limit: MAX_MANIFEST_SIZE,
        });
    }
    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    tracing::debug!(path = %path.display(), bytes = size, yaml = is_yaml, "read manifest");
    if is_yaml {
        Ok(serde_yaml_ng::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}
