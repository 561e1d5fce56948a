//! Structured diagnostics and the validation report built from them.
//!
//! Every rule produces typed diagnostics carrying a stable code, a severity,
//! and the top-level field they concern. The [`ValidationReport`] is the
//! flattened view: the error and warning messages in evaluation order.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A rule violation that makes the manifest unpublishable.
    Error,
    /// A recommendation that does not affect validity.
    Warning,
}

/// A structured diagnostic message from manifest validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., `"M001"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Top-level manifest field that caused the diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Set the field that caused this diagnostic.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Returns `true` if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Errors print the bare message, warnings are prefixed with `warning: `.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

// ── Diagnostic codes ────────────────────────────────────────────────────

/// Missing required field.
pub const M001: &str = "M001";
/// Missing structural marker field (`publishConfig`).
pub const M002: &str = "M002";
/// Missing recommended field.
pub const M003: &str = "M003";
/// Object form is missing a required sub-key.
pub const M004: &str = "M004";
/// Field has an unsupported shape.
pub const M005: &str = "M005";
/// Object form is missing a recommended sub-key.
pub const M006: &str = "M006";

/// Result of validating one manifest record.
///
/// Constructed once from a complete diagnostic list and never mutated.
/// `valid` is `true` exactly when there are no errors; warnings never
/// affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    /// Split diagnostics into error and warning messages, preserving order.
    #[must_use]
    pub fn from_diagnostics(diags: &[Diagnostic]) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = diags.iter().partition(|d| d.is_error());
        let errors: Vec<String> = errors.into_iter().map(|d| d.message.clone()).collect();
        let warnings = warnings.into_iter().map(|d| d.message.clone()).collect();
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Returns `true` if the manifest has no errors.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Error messages in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warning messages in evaluation order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl From<&[Diagnostic]> for ValidationReport {
    fn from(diags: &[Diagnostic]) -> Self {
        Self::from_diagnostics(diags)
    }
}
