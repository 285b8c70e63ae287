//! Route definitions for the `/ai` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai` (all require auth).
///
/// ```text
/// GET /recommendations  -> recommendations (?type=)
/// GET /insights         -> insights
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommendations", get(ai::recommendations))
        .route("/insights", get(ai::insights))
}
