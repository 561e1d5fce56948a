use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a manifest.
///
/// Rule violations are never errors; they are reported as diagnostics.
#[derive(Error, Debug)]
pub enum PublishableError {
    /// The manifest value is not a mapping of field names to values.
    #[error("manifest must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// No manifest file was found at the given location.
    #[error("no package.json or package.yaml found in {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest file exceeds the size limit.
    #[error("{} exceeds {limit} bytes", .path.display())]
    TooLarge { path: PathBuf, limit: u64 },

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Convenience alias for `Result<T, PublishableError>`.
pub type Result<T> = std::result::Result<T, PublishableError>;
