pub mod diagnostics;
pub mod errors;
pub mod fields;
pub mod loader;
pub mod rules;
pub mod validator;

/// A manifest under validation: field names mapped to arbitrary JSON values.
pub type ManifestRecord = serde_json::Map<String, serde_json::Value>;

// Re-export key types at crate root for convenience.
pub use diagnostics::{Diagnostic, Severity, ValidationReport};
pub use errors::{PublishableError, Result};
pub use fields::{validate_bugs, validate_engines, validate_homepage, validate_repository};
pub use loader::{find_manifest, read_manifest, resolve_manifest};
pub use rules::{check, FieldRule, Presence, RuleSet, Shape, SubKeyRule};
pub use validator::{
    as_record, validate, validate_diagnostics, validate_json, validate_value, validate_with_rules,
};
