//! Presence and type checks for declared payload fields.

use serde_json::{Map, Value};

use super::error::{PayloadError, TypeMismatch};
use super::kind::ValueKind;
use super::spec::FieldSpec;

/// Check `data` against the declared fields in `spec` and return only the
/// declared fields that were supplied.
///
/// 1. Every declared field not listed in `optional` must be present. On
///    failure the error lists *all* absent declared fields, optional ones
///    included.
/// 2. Every declared field that is present must hold a value of exactly the
///    declared [`ValueKind`]. All mismatches are reported together.
/// 3. Fields not declared in `spec` are dropped from the result; values are
///    cloned unmodified, in declaration order.
///
/// ```
/// use serde_json::json;
/// use tattoo_core::payload::{payload_eval, FieldSpec, ValueKind};
///
/// let data = json!({"name": "a", "price": 1.0, "extra": true});
/// let spec = FieldSpec::new()
///     .field("name", ValueKind::Text)
///     .field("price", ValueKind::Float);
///
/// let clean = payload_eval(data.as_object().unwrap(), &[] as &[&str], &spec).unwrap();
/// assert_eq!(serde_json::Value::Object(clean), json!({"name": "a", "price": 1.0}));
/// ```
pub fn payload_eval<S: AsRef<str>>(
    data: &Map<String, Value>,
    optional: &[S],
    spec: &FieldSpec,
) -> Result<Map<String, Value>, PayloadError> {
    let missing: Vec<String> = spec
        .names()
        .filter(|name| !data.contains_key(*name))
        .map(str::to_owned)
        .collect();

    let is_optional = |name: &str| optional.iter().any(|o| o.as_ref() == name);
    if missing.iter().any(|name| !is_optional(name.as_str())) {
        return Err(PayloadError::FieldMissing { missing });
    }

    let mismatches: Vec<TypeMismatch> = spec
        .iter()
        .filter_map(|(name, expected)| {
            let value = data.get(name)?;
            (!expected.matches(value)).then(|| TypeMismatch {
                field: name.to_owned(),
                expected: *expected,
                actual: ValueKind::of(value),
            })
        })
        .collect();

    if !mismatches.is_empty() {
        return Err(PayloadError::InvalidValueTypes { mismatches });
    }

    Ok(spec
        .names()
        .filter_map(|name| data.get(name).map(|value| (name.to_owned(), value.clone())))
        .collect())
}
