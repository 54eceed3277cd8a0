//! Route definitions for the `/payloads` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payloads;
use crate::state::AppState;

/// Routes mounted at `/payloads`.
///
/// ```text
/// POST   /check   -> check_payload
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(payloads::check_payload))
}
