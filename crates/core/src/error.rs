use crate::payload::PayloadError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A request payload failed presence, type, or fixed-value checks.
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
