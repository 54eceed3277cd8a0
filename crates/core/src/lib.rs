//! Pure domain logic for the tattoo studio API.
//!
//! Nothing in this crate touches the network or the database; the API crate
//! calls into it from request handlers.

pub mod error;
pub mod payload;
