//! Form state and the paths that address it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trellis_validator::path;

use crate::error::FormError;

/// Dotted address of a value inside [`FormState`].
///
/// The root path is empty. Joining appends a `.`-separated segment.
///
/// ```
/// use trellis_form::StatePath;
///
/// let items = StatePath::root().join("items");
/// assert_eq!(items.join(0).join("name").as_str(), "items.0.name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatePath(String);

impl StatePath {
    /// The empty root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends a segment.
    #[must_use]
    pub fn join(&self, segment: impl fmt::Display) -> Self {
        if self.0.is_empty() {
            Self(segment.to_string())
        } else {
            Self(format!("{}.{segment}", self.0))
        }
    }

    /// Whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StatePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StatePath {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The current values of a form, as a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct FormState {
    values: Value,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: Value::Object(Map::new()),
        }
    }
}

impl FormState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON value. Only objects are accepted.
    pub fn from_value(values: Value) -> Result<Self, FormError> {
        if values.is_object() {
            Ok(Self { values })
        } else {
            Err(FormError::InvalidState {
                found: json_type_name(&values).to_owned(),
            })
        }
    }

    /// Look up a value by dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::get(&self.values, path)
    }

    /// Write a value at a dotted path.
    pub fn set(&mut self, path: &str, value: Value) {
        path::set(&mut self.values, path, value);
    }

    /// Write a value (builder-style, consuming).
    #[must_use]
    pub fn with_value(mut self, path: &str, value: Value) -> Self {
        self.set(path, value);
        self
    }

    /// Number of items in the array at `path`, or zero.
    #[must_use]
    pub fn array_len(&self, path: &str) -> usize {
        self.get(path).and_then(Value::as_array).map_or(0, Vec::len)
    }

    /// The whole state as JSON.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.values
    }
}

impl TryFrom<Value> for FormState {
    type Error = FormError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<FormState> for Value {
    fn from(state: FormState) -> Self {
        state.values
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
