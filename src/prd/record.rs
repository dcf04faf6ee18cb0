//! @acp:module "Input Record"
//! @acp:summary "Read-only field mapping supplied to document generation"
//! @acp:domain prd
//! @acp:layer model
//!
//! Every accessor takes a default, so a record with no fields at all still
//! produces a complete document.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::format::display_value;
use crate::error::{PrdError, Result};

/// Serialization format of an input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        ext.parse().ok()
    }
}

impl FromStr for InputFormat {
    type Err = PrdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(PrdError::UnknownFormat(s.to_string())),
        }
    }
}

/// @acp:summary "Mapping from field name to value"
/// @acp:lock normal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord {
    fields: Map<String, Value>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Only mappings are accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(PrdError::NotAMapping(value_kind(&other))),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(s)?;
        Self::from_value(value)
    }

    pub fn parse(s: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json_str(s),
            InputFormat::Yaml => Self::from_yaml_str(s),
        }
    }

    /// Read a record from any reader (stdin for the CLI)
    pub fn read<R: Read>(mut reader: R, format: InputFormat) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::parse(&buf, format)
    }

    /// @acp:summary "Load a record from a .json, .yaml or .yml file"
    ///
    /// Files without a recognised extension are parsed as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path).unwrap_or_default();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Builder-style insert, mostly for tests and the init command
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Field value; `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Display text of a field, or `default` when absent
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .map(display_value)
            .unwrap_or_else(|| default.to_string())
    }

    /// Numeric field. Numeric strings are accepted; anything else yields `default`.
    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(value) => as_number(value).unwrap_or_else(|| {
                tracing::debug!("Field {} is not numeric, using default {}", key, default);
                default
            }),
            None => default,
        }
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for InputRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for InputRecord {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Truthiness of a record value: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_for_missing_fields() {
        let record = InputRecord::new();
        assert_eq!(record.text_or("feature_name", "fallback"), "fallback");
        assert_eq!(record.number_or("effort_estimate", 5.0), 5.0);
        assert!(!record.is_truthy("ai_ml_requirements"));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let record = InputRecord::new().with("target_users", Value::Null);
        assert!(!record.contains("target_users"));
        assert_eq!(record.text_or("target_users", "our users"), "our users");
    }

    #[test]
    fn test_number_or_accepts_numeric_strings() {
        let record = InputRecord::new()
            .with("reach_estimate", "2500")
            .with("effort_estimate", "a lot");
        assert_eq!(record.number_or("reach_estimate", 0.0), 2500.0);
        assert_eq!(record.number_or("effort_estimate", 5.0), 5.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!({})));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!({"model_type": "classifier"})));
        assert!(is_truthy(&json!("yes")));
    }

    #[test]
    fn test_from_json_rejects_non_mapping() {
        let err = InputRecord::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, PrdError::NotAMapping("a list")));
    }

    #[test]
    fn test_from_yaml() {
        let record = InputRecord::from_yaml_str(
            "feature_name: Smart Search\ntarget_users:\n  - Admins\n  - End users\n",
        )
        .unwrap();
        assert_eq!(record.text_or("feature_name", ""), "Smart Search");
        assert_eq!(record.get("target_users"), Some(&json!(["Admins", "End users"])));
    }

    #[test]
    fn test_input_format_detection() {
        assert_eq!(
            InputFormat::from_path(Path::new("prd.input.YAML")),
            Some(InputFormat::Yaml)
        );
        assert_eq!(
            InputFormat::from_path(Path::new("input.json")),
            Some(InputFormat::Json)
        );
        assert_eq!(InputFormat::from_path(Path::new("input.txt")), None);
        assert!("toml".parse::<InputFormat>().is_err());
    }
}
