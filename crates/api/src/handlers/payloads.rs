//! Handlers for the `/payloads` resource.
//!
//! `POST /payloads/check` is a dry run of the request validators: clients
//! (and the admin tooling) submit a payload together with its field
//! declarations and get back exactly what a handler would see after
//! validation.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};
use tattoo_core::error::CoreError;
use tattoo_core::payload::{fixed_values_eval, payload_eval, FieldSpec, FixedValueSpec};
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// Request body for `POST /api/v1/payloads/check`.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "optional_fields_are_declared"))]
pub struct CheckPayloadRequest {
    /// The payload under test.
    pub data: Map<String, Value>,
    /// Declared fields and their kinds, e.g. `{"name": "text"}`.
    #[validate(custom(function = "fields_not_empty"))]
    pub fields: FieldSpec,
    /// Declared fields that may be omitted.
    #[serde(default)]
    pub optional: Vec<String>,
    /// Allowed values for enumerated fields, e.g. `{"status": ["Success", "Fail"]}`.
    #[serde(default)]
    pub fixed_values: Option<FixedValueSpec>,
}

fn fields_not_empty(fields: &FieldSpec) -> Result<(), ValidationError> {
    if fields.is_empty() {
        return Err(ValidationError::new("empty")
            .with_message("at least one field must be declared".into()));
    }
    Ok(())
}

fn optional_fields_are_declared(req: &CheckPayloadRequest) -> Result<(), ValidationError> {
    match req.optional.iter().find(|name| !req.fields.contains(name)) {
        Some(name) => Err(ValidationError::new("undeclared_optional")
            .with_message(format!("optional field `{name}` is not declared in fields").into())),
        None => Ok(()),
    }
}

/// POST /api/v1/payloads/check
///
/// Runs the required-field check and, when `fixed_values` is given, the
/// fixed-value check. Returns the payload restricted to the declared fields.
pub async fn check_payload(
    user: AuthUser,
    body: Result<Json<CheckPayloadRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<Map<String, Value>>>> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))?;

    let clean = payload_eval(&input.data, input.optional.as_slice(), &input.fields)?;
    if let Some(fixed) = &input.fixed_values {
        fixed_values_eval(&input.data, fixed)?;
    }

    tracing::debug!(
        subject = %user.subject,
        declared = input.fields.len(),
        accepted = clean.len(),
        "Payload check passed"
    );

    Ok(Json(DataResponse { data: clean }))
}
