//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media` (all require auth).
///
/// ```text
/// POST   /          -> create
/// GET    /          -> list (?type=&status=)
/// GET    /stats     -> stats
/// GET    /search    -> search (?q=)
/// GET    /{id}      -> get
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list).post(media::create))
        .route("/stats", get(media::stats))
        .route("/search", get(media::search))
        .route(
            "/{id}",
            get(media::get).patch(media::update).delete(media::remove),
        )
}
