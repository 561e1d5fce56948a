use serde_json::Value;

use crate::diagnostics::{Diagnostic, ValidationReport};
use crate::errors::{PublishableError, Result};
use crate::rules::{check, type_name, RuleSet};
use crate::ManifestRecord;

/// Validate a manifest record against the publish-readiness rules.
///
/// Every rule runs; nothing short-circuits. The record is only read.
#[must_use]
pub fn validate(record: &ManifestRecord) -> ValidationReport {
    ValidationReport::from_diagnostics(&validate_diagnostics(record))
}

/// Validate a manifest record and return the structured findings.
///
/// Diagnostics follow evaluation order: required fields, `publishConfig`,
/// then `repository`, `bugs`, `homepage`, `engines`.
#[must_use]
pub fn validate_diagnostics(record: &ManifestRecord) -> Vec<Diagnostic> {
    validate_with_rules(record, &RuleSet::publishable())
}

/// Validate a manifest record against an arbitrary rule set.
///
/// Findings are concatenated in rule order.
#[must_use]
pub fn validate_with_rules(record: &ManifestRecord, rules: &RuleSet) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    for rule in rules {
        let found = check(rule, record);
        tracing::trace!(field = rule.field, findings = found.len(), "checked rule");
        diags.extend(found);
    }
    tracing::debug!(
        rules = rules.len(),
        errors = diags.iter().filter(|d| d.is_error()).count(),
        warnings = diags.iter().filter(|d| d.is_warning()).count(),
        "validated manifest"
    );
    diags
}

/// Validate an arbitrary JSON value.
///
/// Anything other than a JSON object (including `null`) is a caller error,
/// not an empty manifest.
pub fn validate_value(value: &Value) -> Result<ValidationReport> {
    as_record(value).map(validate)
}

/// View a JSON value as a manifest record, failing if it is not an object.
pub fn as_record(value: &Value) -> Result<&ManifestRecord> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(PublishableError::NotAnObject {
            found: type_name(other),
        }),
    }
}

/// Parse a JSON document and validate it.
pub fn validate_json(content: &str) -> Result<ValidationReport> {
    let value: Value = serde_json::from_str(content)?;
    validate_value(&value)
}
