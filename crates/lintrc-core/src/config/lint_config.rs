//! Configuration file model
//!
//! These types mirror the on-disk document one to one. They are produced by
//! the loader and turned into a [`ConfigDocument`](super::ConfigDocument)
//! once `extends` has been resolved.

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Lint configuration document as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LintConfiguration {
    /// Environment flags
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Runtime environments the linted code assumes")]
    pub env: IndexMap<String, bool>,

    /// Presets or files this configuration builds on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Preset name or config file path(s) to extend")]
    pub extends: Option<Extends>,

    /// Rule overrides
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    #[schemars(description = "Rule severity and options, keyed by rule name")]
    pub rules: IndexMap<String, RuleEntry>,
}

impl LintConfiguration {
    /// JSON schema for configuration validation and editor completion
    pub fn json_schema() -> serde_json::Value {
        schemars::schema_for!(LintConfiguration).to_value()
    }
}

/// `extends` accepts one name or a list of names
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Extends {
    Single(String),
    Many(Vec<String>),
}

impl Extends {
    /// Entries in the order they should be applied
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Extends::Single(name) => vec![name.as_str()],
            Extends::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Build from a list, collapsing a single entry to the short form
    pub fn from_names(mut names: Vec<String>) -> Option<Self> {
        match names.len() {
            0 => None,
            1 => names.pop().map(Extends::Single),
            _ => Some(Extends::Many(names)),
        }
    }
}

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the run)
    Warn,
    /// Error (fails the run)
    Error,
}

impl RuleSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::Off => "off",
            RuleSeverity::Warn => "warn",
            RuleSeverity::Error => "error",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != RuleSeverity::Off
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleSeverity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        severity_from_value(&value).map_err(D::Error::custom)
    }
}

/// Accepts `"off" | "warn" | "error"` (any case) or `0 | 1 | 2`
fn severity_from_value(value: &serde_json::Value) -> Result<RuleSeverity, String> {
    use serde_json::Value;

    match value {
        Value::String(name) => match name.to_ascii_lowercase().as_str() {
            "off" => Ok(RuleSeverity::Off),
            "warn" => Ok(RuleSeverity::Warn),
            "error" => Ok(RuleSeverity::Error),
            _ => Err(format!(
                "invalid severity '{name}' (expected \"off\", \"warn\", \"error\", 0, 1 or 2)"
            )),
        },
        // JSON5 may hand integers over as floats
        Value::Number(number) => match number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
        {
            Some(0) => Ok(RuleSeverity::Off),
            Some(1) => Ok(RuleSeverity::Warn),
            Some(2) => Ok(RuleSeverity::Error),
            _ => Err(format!(
                "invalid severity level {number} (expected 0, 1 or 2)"
            )),
        },
        other => Err(format!(
            "invalid severity {other} (expected \"off\", \"warn\", \"error\", 0, 1 or 2)"
        )),
    }
}

impl JsonSchema for RuleSeverity {
    fn schema_name() -> Cow<'static, str> {
        "RuleSeverity".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Rule severity: off/warn/error or 0/1/2",
            "oneOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }
}

/// A single rule setting: severity plus rule-specific parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "RuleEntryRepr")]
pub struct RuleEntry {
    pub severity: RuleSeverity,
    pub parameters: Vec<serde_json::Value>,
}

impl RuleEntry {
    pub fn new(severity: RuleSeverity) -> Self {
        Self {
            severity,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(severity: RuleSeverity, parameters: Vec<serde_json::Value>) -> Self {
        Self {
            severity,
            parameters,
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Array(mut values) => {
                if values.is_empty() {
                    return Err(D::Error::custom(
                        "rule setting array must start with a severity",
                    ));
                }
                let parameters = values.split_off(1);
                let severity = severity_from_value(&values[0]).map_err(D::Error::custom)?;
                Ok(RuleEntry::with_parameters(severity, parameters))
            }
            value => severity_from_value(&value)
                .map(RuleEntry::new)
                .map_err(D::Error::custom),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum RuleEntryRepr {
    Severity(RuleSeverity),
    WithOptions(Vec<serde_json::Value>),
}

impl From<RuleEntry> for RuleEntryRepr {
    fn from(entry: RuleEntry) -> Self {
        if entry.parameters.is_empty() {
            RuleEntryRepr::Severity(entry.severity)
        } else {
            let mut values = Vec::with_capacity(entry.parameters.len() + 1);
            values.push(serde_json::Value::from(entry.severity.as_str()));
            values.extend(entry.parameters);
            RuleEntryRepr::WithOptions(values)
        }
    }
}

impl JsonSchema for RuleEntry {
    fn schema_name() -> Cow<'static, str> {
        "RuleEntry".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let severity = generator.subschema_for::<RuleSeverity>();
        json_schema!({
            "description": "Severity alone, or [severity, ...options]",
            "oneOf": [
                severity,
                {
                    "type": "array",
                    "minItems": 1,
                    "prefixItems": [severity]
                }
            ]
        })
    }
}
