//! Declarative manifest rules and the generic routine that checks them.
//!
//! A rule names one top-level field, what its absence means, which value
//! shapes it accepts, and which sub-keys its object form must (or should)
//! carry. Adding a field to the publish checks means adding a [`FieldRule`]
//! to a [`RuleSet`], not writing new control flow.

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, Severity, M001, M002, M003, M004, M005, M006};
use crate::ManifestRecord;

/// Fields every publishable manifest must declare, in evaluation order.
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "version",
    "description",
    "main",
    "types",
    "files",
    "keywords",
    "author",
    "license",
];

/// Marker field whose presence opts the package into publishing.
pub const PUBLISH_CONFIG: &str = "publishConfig";

/// What the absence of a field means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Absence is an error (`Missing required field: <field>`).
    Required,
    /// Absence is an error (`Missing <field> field`).
    Marker,
    /// Absence is a warning (`Missing recommended field: <field>`).
    Recommended,
}

/// Value shapes a present field may take.
///
/// `message` is the error reported when the value has any other shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Any value, including `null`.
    Any,
    /// A string only.
    String { message: &'static str },
    /// An object only.
    Object { message: &'static str },
    /// A string shorthand or an object.
    StringOrObject { message: &'static str },
}

impl Shape {
    fn accepts(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Shape::Any, _) => true,
            (Shape::String { .. } | Shape::StringOrObject { .. }, ValueKind::String) => true,
            (Shape::Object { .. } | Shape::StringOrObject { .. }, ValueKind::Object) => true,
            _ => false,
        }
    }

    fn message(&self) -> Option<&'static str> {
        match self {
            Shape::Any => None,
            Shape::String { message }
            | Shape::Object { message }
            | Shape::StringOrObject { message } => Some(*message),
        }
    }
}

/// A key expected inside the object form of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubKeyRule {
    /// Key looked up in the object.
    pub key: &'static str,
    /// `Error` for required sub-keys, `Warning` for recommended ones.
    pub severity: Severity,
    /// Message reported when the key is absent.
    pub message: &'static str,
}

impl SubKeyRule {
    /// A sub-key whose absence is an error.
    #[must_use]
    pub const fn required(key: &'static str, message: &'static str) -> Self {
        Self {
            key,
            severity: Severity::Error,
            message,
        }
    }

    /// A sub-key whose absence is a warning.
    #[must_use]
    pub const fn recommended(key: &'static str, message: &'static str) -> Self {
        Self {
            key,
            severity: Severity::Warning,
            message,
        }
    }
}

/// One declarative check over a top-level manifest field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// Top-level field name.
    pub field: &'static str,
    /// Consequence of the field being absent.
    pub presence: Presence,
    /// Accepted shapes once present.
    pub shape: Shape,
    /// Keys checked when the value is an accepted object.
    pub sub_keys: &'static [SubKeyRule],
}

impl FieldRule {
    /// A field that must be present, with any value.
    #[must_use]
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            presence: Presence::Required,
            shape: Shape::Any,
            sub_keys: &[],
        }
    }

    /// A marker field that must be present, with any value.
    #[must_use]
    pub const fn marker(field: &'static str) -> Self {
        Self {
            field,
            presence: Presence::Marker,
            shape: Shape::Any,
            sub_keys: &[],
        }
    }
}

/// `repository`: `"github:user/repo"` shorthand or `{ type, url }`.
pub const REPOSITORY: FieldRule = FieldRule {
    field: "repository",
    presence: Presence::Recommended,
    shape: Shape::StringOrObject {
        message: "repository must be an object with type and url, or a string",
    },
    sub_keys: &[
        SubKeyRule::required("type", "repository.type is required"),
        SubKeyRule::required("url", "repository.url is required"),
    ],
};

/// `bugs`: an issue tracker URL string or `{ url, ... }`.
pub const BUGS: FieldRule = FieldRule {
    field: "bugs",
    presence: Presence::Recommended,
    shape: Shape::StringOrObject {
        message: "bugs must be an object with url, or a string",
    },
    sub_keys: &[SubKeyRule::required(
        "url",
        "bugs.url is required when bugs is an object",
    )],
};

/// `homepage`: a string only.
pub const HOMEPAGE: FieldRule = FieldRule {
    field: "homepage",
    presence: Presence::Recommended,
    shape: Shape::String {
        message: "homepage must be a string",
    },
    sub_keys: &[],
};

/// `engines`: an object, ideally pinning `node`.
pub const ENGINES: FieldRule = FieldRule {
    field: "engines",
    presence: Presence::Recommended,
    shape: Shape::Object {
        message: "engines must be an object",
    },
    sub_keys: &[SubKeyRule::recommended(
        "node",
        "engines.node is recommended to specify Node.js compatibility",
    )],
};

/// Three-way classification of a present value.
///
/// Arrays and `null` are never objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    Object,
    String,
    Other,
}

impl ValueKind {
    pub(crate) fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Object,
            Value::String(_) => ValueKind::String,
            _ => ValueKind::Other,
        }
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check one rule against a record.
///
/// Absence yields exactly one presence diagnostic. A present value with an
/// unsupported shape yields exactly one shape error. An accepted object has
/// every sub-key rule evaluated, each independently.
#[must_use]
pub fn check(rule: &FieldRule, record: &ManifestRecord) -> Vec<Diagnostic> {
    let Some(value) = record.get(rule.field) else {
        return vec![missing(rule)];
    };

    let kind = ValueKind::of(value);
    if !rule.shape.accepts(kind) {
        return rule
            .shape
            .message()
            .map(|message| {
                Diagnostic::new(Severity::Error, M005, message).with_field(rule.field)
            })
            .into_iter()
            .collect();
    }

    let Value::Object(object) = value else {
        return Vec::new();
    };
    rule.sub_keys
        .iter()
        .filter(|sub| !object.contains_key(sub.key))
        .map(|sub| {
            let code = match sub.severity {
                Severity::Error => M004,
                Severity::Warning => M006,
            };
            Diagnostic::new(sub.severity, code, sub.message).with_field(rule.field)
        })
        .collect()
}

fn missing(rule: &FieldRule) -> Diagnostic {
    let (severity, code, message) = match rule.presence {
        Presence::Required => (
            Severity::Error,
            M001,
            format!("Missing required field: {}", rule.field),
        ),
        Presence::Marker => (Severity::Error, M002, format!("Missing {} field", rule.field)),
        Presence::Recommended => (
            Severity::Warning,
            M003,
            format!("Missing recommended field: {}", rule.field),
        ),
    };
    Diagnostic::new(severity, code, message).with_field(rule.field)
}

/// An ordered collection of rules, evaluated first to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// A rule set with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The publish-readiness rules: required fields, `publishConfig`,
    /// then `repository`, `bugs`, `homepage`, `engines`.
    #[must_use]
    pub fn publishable() -> Self {
        let mut rules: Vec<FieldRule> = REQUIRED_FIELDS
            .iter()
            .copied()
            .map(FieldRule::required)
            .collect();
        rules.push(FieldRule::marker(PUBLISH_CONFIG));
        rules.extend([REPOSITORY, BUGS, HOMEPAGE, ENGINES]);
        Self { rules }
    }

    /// Append a rule, evaluated after all existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Iterate over rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldRule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::publishable()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a FieldRule;
    type IntoIter = std::slice::Iter<'a, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ManifestRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("test record must be an object, got {other}"),
        }
    }

    fn messages(diags: &[Diagnostic]) -> Vec<&str> {
        diags.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn required_absent_is_error() {
        let diags = check(&FieldRule::required("main"), &record(json!({})));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, M001);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].message, "Missing required field: main");
        assert_eq!(diags[0].field, Some("main"));
    }

    #[test]
    fn required_null_counts_as_present() {
        let diags = check(&FieldRule::required("main"), &record(json!({ "main": null })));
        assert!(diags.is_empty());
    }

    #[test]
    fn required_empty_string_counts_as_present() {
        let diags = check(&FieldRule::required("main"), &record(json!({ "main": "" })));
        assert!(diags.is_empty());
    }

    #[test]
    fn marker_absent_uses_marker_message() {
        let diags = check(&FieldRule::marker(PUBLISH_CONFIG), &record(json!({})));
        assert_eq!(messages(&diags), ["Missing publishConfig field"]);
        assert_eq!(diags[0].code, M002);
    }

    #[test]
    fn marker_contents_are_not_inspected() {
        for value in [json!({}), json!("public"), json!(42), json!(null)] {
            let diags = check(
                &FieldRule::marker(PUBLISH_CONFIG),
                &record(json!({ "publishConfig": value })),
            );
            assert!(diags.is_empty());
        }
    }

    #[test]
    fn recommended_absent_is_warning() {
        let diags = check(&HOMEPAGE, &record(json!({})));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, M003);
        assert!(diags[0].is_warning());
        assert_eq!(diags[0].message, "Missing recommended field: homepage");
    }

    #[test]
    fn shape_mismatch_stops_before_sub_keys() {
        let diags = check(&REPOSITORY, &record(json!({ "repository": 7 })));
        assert_eq!(
            messages(&diags),
            ["repository must be an object with type and url, or a string"]
        );
        assert_eq!(diags[0].code, M005);
    }

    #[test]
    fn array_is_not_an_object() {
        let diags = check(&REPOSITORY, &record(json!({ "repository": ["git", "url"] })));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, M005);
    }

    #[test]
    fn null_is_not_an_object() {
        let diags = check(&ENGINES, &record(json!({ "engines": null })));
        assert_eq!(messages(&diags), ["engines must be an object"]);
    }

    #[test]
    fn sub_keys_checked_independently_in_order() {
        let diags = check(&REPOSITORY, &record(json!({ "repository": {} })));
        assert_eq!(
            messages(&diags),
            ["repository.type is required", "repository.url is required"]
        );
        assert!(diags.iter().all(|d| d.code == M004));
    }

    #[test]
    fn recommended_sub_key_is_warning() {
        let diags = check(&ENGINES, &record(json!({ "engines": {} })));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, M006);
        assert!(diags[0].is_warning());
    }

    #[test]
    fn string_form_skips_sub_keys() {
        let diags = check(&BUGS, &record(json!({ "bugs": "https://example.com/issues" })));
        assert!(diags.is_empty());
    }

    #[test]
    fn sub_key_with_null_value_counts_as_present() {
        let diags = check(&BUGS, &record(json!({ "bugs": { "url": null } })));
        assert!(diags.is_empty());
    }

    #[test]
    fn custom_rule_plugs_into_generic_check() {
        const FUNDING: FieldRule = FieldRule {
            field: "funding",
            presence: Presence::Recommended,
            shape: Shape::StringOrObject {
                message: "funding must be an object with url, or a string",
            },
            sub_keys: &[SubKeyRule::required("url", "funding.url is required")],
        };
        let absent = check(&FUNDING, &record(json!({})));
        assert_eq!(messages(&absent), ["Missing recommended field: funding"]);
        let partial = check(&FUNDING, &record(json!({ "funding": { "type": "github" } })));
        assert_eq!(messages(&partial), ["funding.url is required"]);
    }

    #[test]
    fn publishable_rule_order() {
        let fields: Vec<&str> = RuleSet::publishable().iter().map(|r| r.field).collect();
        assert_eq!(
            fields,
            [
                "name",
                "version",
                "description",
                "main",
                "types",
                "files",
                "keywords",
                "author",
                "license",
                "publishConfig",
                "repository",
                "bugs",
                "homepage",
                "engines",
            ]
        );
    }

    #[test]
    fn default_is_publishable() {
        assert_eq!(RuleSet::default(), RuleSet::publishable());
        assert_eq!(RuleSet::default().len(), 14);
    }

    #[test]
    fn with_rule_appends_last() {
        let rules = RuleSet::empty().with_rule(HOMEPAGE).with_rule(ENGINES);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[1].field, "engines");
        assert!(RuleSet::empty().is_empty());
    }

    #[test]
    fn value_kind_classification() {
        assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
        assert_eq!(ValueKind::of(&json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!([])), ValueKind::Other);
        assert_eq!(ValueKind::of(&json!(null)), ValueKind::Other);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Other);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Other);
    }

    #[test]
    fn rule_set_serializes_as_array() {
        let json = serde_json::to_value(RuleSet::publishable()).unwrap();
        let rules = json.as_array().unwrap();
        assert_eq!(rules.len(), 14);
        assert_eq!(rules[9]["presence"], "marker");
        assert_eq!(rules[10]["shape"]["kind"], "string_or_object");
        assert_eq!(rules[13]["sub_keys"][0]["severity"], "warning");
    }
}
