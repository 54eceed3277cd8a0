pub mod health;
pub mod payloads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /payloads/check                                  dry-run payload validation (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/payloads", payloads::router())
}
