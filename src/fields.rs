//! Validators for the recommended, structured manifest fields.
//!
//! Each validator inspects one field and returns its own findings; none of
//! them read or write shared state.

use crate::diagnostics::Diagnostic;
use crate::rules::{check, BUGS, ENGINES, HOMEPAGE, REPOSITORY};
use crate::ManifestRecord;

/// Validate `repository`: a shorthand string, or an object with `type` and `url`.
#[must_use]
pub fn validate_repository(record: &ManifestRecord) -> Vec<Diagnostic> {
    check(&REPOSITORY, record)
}

/// Validate `bugs`: a string, or an object with `url`.
#[must_use]
pub fn validate_bugs(record: &ManifestRecord) -> Vec<Diagnostic> {
    check(&BUGS, record)
}

/// Validate `homepage`: a string.
#[must_use]
pub fn validate_homepage(record: &ManifestRecord) -> Vec<Diagnostic> {
    check(&HOMEPAGE, record)
}

/// Validate `engines`: an object, warning when `node` is not pinned.
#[must_use]
pub fn validate_engines(record: &ManifestRecord) -> Vec<Diagnostic> {
    check(&ENGINES, record)
}
