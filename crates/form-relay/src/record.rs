use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Raw, string-keyed input for one form submission.
///
/// Values are stored exactly as received; readers go through [`SubmissionRecord::value`],
/// which trims surrounding whitespace and treats an absent key as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    fields: BTreeMap<String, String>,
}

impl SubmissionRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Decode a JSON document that must be an object of scalar values.
    pub fn from_json_str(raw: &str) -> Result<Self, RecordError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(value)
    }

    pub fn from_json(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Self::from_object(map),
            other => Err(RecordError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    fn from_object(map: Map<String, Value>) -> Result<Self, RecordError> {
        let mut fields = BTreeMap::new();
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text,
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                other @ (Value::Array(_) | Value::Object(_)) => {
                    return Err(RecordError::UnsupportedValue {
                        field: key,
                        found: json_kind(&other),
                    })
                }
            };
            fields.insert(key, text);
        }

        Ok(Self { fields })
    }

    /// Trimmed value for `name`, or `""` when the key is absent.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(|value| value.trim()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Reasons a request body cannot become a [`SubmissionRecord`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{0}")]
    Syntax(#[from] serde_json::Error),
    #[error("request body is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("field '{field}' must be a string, found {found}")]
    UnsupportedValue { field: String, found: &'static str },
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
