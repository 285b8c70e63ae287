pub mod ai;
pub mod auth;
pub mod health;
pub mod media;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /health                  health check (public)
///
/// /auth/signup             register (public)
/// /auth/signin             authenticate (public)
/// /auth/profile            profile (requires auth)
///
/// /media                   list, create (requires auth)
/// /media/stats             aggregate stats
/// /media/search            title/notes substring search (?q=)
/// /media/{id}              get, update, delete
///
/// /ai/recommendations      rule-based recommendations (?type=)
/// /ai/insights             collection insights
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (signup, signin, profile).
        .nest("/auth", auth::router())
        // Owner-scoped media item routes.
        .nest("/media", media::router())
        // Rule-based recommendation routes.
        .nest("/ai", ai::router())
}
