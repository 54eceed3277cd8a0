use serde_json::{json, Map, Value};

use super::kind::ValueKind;
use super::spec::FixedValueSpec;

/// A declared field whose value is not of the declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub field: String,
    pub expected: ValueKind,
    /// Kind of the received value; `None` for `null`.
    pub actual: Option<ValueKind>,
}

impl TypeMismatch {
    pub fn message(&self) -> String {
        let actual = self.actual.map_or("null", ValueKind::as_str);
        format!(
            "Invalid type, `{}` type should be {} but was {}",
            self.field, self.expected, actual
        )
    }
}

/// Why a request payload was rejected. Every variant is a client error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    /// At least one required field is absent. `missing` lists every absent
    /// declared field, optional ones included.
    #[error("missing keys: {missing:?}")]
    FieldMissing { missing: Vec<String> },

    /// At least one present field has a value of the wrong kind.
    #[error("{}", last_message(.mismatches))]
    InvalidValueTypes { mismatches: Vec<TypeMismatch> },

    /// At least one fixed-value field holds a value outside its allowed set.
    /// `received_options` echoes every checked field, valid or not.
    #[error("invalid option for fields: {}", invalid_fields(.valid_options, .received_options))]
    InvalidFixedValue {
        valid_options: FixedValueSpec,
        received_options: Map<String, Value>,
    },
}

impl PayloadError {
    /// Structured description returned to the client in the error body.
    pub fn description(&self) -> Value {
        match self {
            Self::FieldMissing { missing } => json!({
                "error": self.to_string(),
                "missing": missing,
            }),
            Self::InvalidValueTypes { mismatches } => {
                let details: Vec<Value> = mismatches
                    .iter()
                    .map(|m| {
                        json!({
                            "field": m.field,
                            "expected": m.expected,
                            "actual": m.actual,
                            "message": m.message(),
                        })
                    })
                    .collect();
                json!({
                    "error": last_message(mismatches),
                    "mismatches": details,
                })
            }
            Self::InvalidFixedValue {
                valid_options,
                received_options,
            } => json!({
                "msg": {
                    "valid_options": valid_options,
                    "received_options": received_options,
                }
            }),
        }
    }
}

/// The single-message form keeps only the last mismatch; the full list is in
/// [`PayloadError::description`].
fn last_message(mismatches: &[TypeMismatch]) -> String {
    mismatches
        .last()
        .map(TypeMismatch::message)
        .unwrap_or_default()
}

fn invalid_fields(valid: &FixedValueSpec, received: &Map<String, Value>) -> String {
    valid
        .iter()
        .filter(|(name, allowed)| received.get(*name).is_some_and(|v| !allowed.contains(v)))
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(", ")
}
