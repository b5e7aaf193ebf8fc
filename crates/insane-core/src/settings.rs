use crate::error::SettingsError;
use serde_json::{Map, Value};

/// Read-only view over the untyped settings document sent by the front end.
///
/// The document is a flat JSON object mapping parameter names to scalars
/// (numbers, strings, booleans) or, for the lipid and solvent tables, to
/// arrays of rows. Parsing the document is the only operation that can fail;
/// every accessor afterwards is total and falls back to a caller-supplied
/// default when a key is missing or has an unusable shape.
#[derive(Debug, Clone)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Parses a JSON settings document.
    pub fn from_json(document: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(document)?;
        Self::from_value(value)
    }

    /// Wraps an already-parsed JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, SettingsError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(SettingsError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }

    /// Floating-point view of a field. Numbers pass through; numeric
    /// strings are parsed; anything else yields `default`.
    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Value::Number(number)) => number.as_f64().unwrap_or(default),
            Some(Value::String(text)) => text.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    pub fn float(&self, key: &str) -> f64 {
        self.float_or(key, 0.0)
    }

    /// Integer view of a field, rounding halves away from zero.
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.float_or(key, default as f64).round() as i64
    }

    pub fn int(&self, key: &str) -> i64 {
        self.int_or(key, 0)
    }

    /// Boolean view of a field. Only a JSON `true` or a string spelling
    /// "true" (any case) counts; everything else is `false`.
    pub fn flag(&self, key: &str) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// String view of a scalar field; missing or non-scalar yields "".
    pub fn text(&self, key: &str) -> String {
        self.values.get(key).map(scalar_text).unwrap_or_default()
    }

    /// Rows of string cells, the shape the lipid and solvent tables use:
    /// an array of arrays of scalars. Rows that are not arrays are skipped;
    /// a missing or non-array value yields no rows at all.
    pub fn rows(&self, key: &str) -> Vec<Vec<String>> {
        let Some(Value::Array(rows)) = self.values.get(key) else {
            return Vec::new();
        };
        rows.iter()
            .filter_map(Value::as_array)
            .map(|cells| cells.iter().map(scalar_text).collect())
            .collect()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
