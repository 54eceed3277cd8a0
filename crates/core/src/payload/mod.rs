//! Request payload validation.
//!
//! Two stateless checks run by handlers before any business logic:
//!
//! - [`payload_eval`] -- field presence (with optional fields), exact value
//!   kind, and stripping of undeclared fields.
//! - [`fixed_values_eval`] -- fields restricted to an enumerated set of values.
//!
//! Both take the payload by reference and never mutate it.

pub mod error;
pub mod fixed;
pub mod kind;
pub mod required;
pub mod spec;

pub use error::{PayloadError, TypeMismatch};
pub use fixed::fixed_values_eval;
pub use kind::{UnknownValueKind, ValueKind};
pub use required::payload_eval;
pub use spec::{FieldMap, FieldSpec, FixedValueSpec};

/// The JSON object submitted with a request.
pub type Payload = serde_json::Map<String, serde_json::Value>;
