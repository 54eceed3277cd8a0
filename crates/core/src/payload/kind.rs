//! Closed set of JSON value kinds a field can be declared as.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared kind of a payload field.
///
/// Kinds are compared exactly: a boolean is never an integer, and an
/// integer literal such as `1` is not a float. Names deserialize through
/// [`FromStr`], so `"Float"` and `"float"` are the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Boolean,
    Array,
    Object,
}

impl ValueKind {
    /// The exact kind of `value`, or `None` for JSON `null`.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(Self::Boolean),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(Self::Integer),
            Value::Number(_) => Some(Self::Float),
            Value::String(_) => Some(Self::Text),
            Value::Array(_) => Some(Self::Array),
            Value::Object(_) => Some(Self::Object),
        }
    }

    /// Whether `value` is exactly of this kind.
    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == Some(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a kind name that is not in [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value kind '{0}' (expected one of: text, integer, float, boolean, array, object)")]
pub struct UnknownValueKind(pub String);

impl FromStr for ValueKind {
    type Err = UnknownValueKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            _ => Err(UnknownValueKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for ValueKind {
    type Error = UnknownValueKind;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
