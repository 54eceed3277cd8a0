//! Enumerated-value checks.

use serde_json::{Map, Value};

use super::error::PayloadError;
use super::spec::FixedValueSpec;

/// Check that every field in `spec` holds one of its allowed values.
///
/// Fields named in `spec` must be present in `data`; absent ones fail with
/// [`PayloadError::FieldMissing`] before any value is compared. Membership
/// is JSON value equality, so `1` and `1.0` are different options.
///
/// On failure the error echoes the full `spec` together with the received
/// value of every checked field, not just the offending ones.
pub fn fixed_values_eval(
    data: &Map<String, Value>,
    spec: &FixedValueSpec,
) -> Result<(), PayloadError> {
    let missing: Vec<String> = spec
        .names()
        .filter(|name| !data.contains_key(*name))
        .map(str::to_owned)
        .collect();

    if !missing.is_empty() {
        return Err(PayloadError::FieldMissing { missing });
    }

    let received_options: Map<String, Value> = spec
        .names()
        .filter_map(|name| data.get(name).map(|value| (name.to_owned(), value.clone())))
        .collect();

    let all_valid = spec.iter().all(|(name, allowed)| {
        received_options
            .get(name)
            .is_some_and(|value| allowed.contains(value))
    });

    if all_valid {
        return Ok(());
    }

    Err(PayloadError::InvalidFixedValue {
        valid_options: spec.clone(),
        received_options,
    })
}
