//! Handlers for the `/ai` resource (rule-based recommendations, insights).
//!
//! "AI" in name only: recommendations come from a fixed per-type table in
//! `medialog_core::recommendations` and insights reuse the same stats
//! aggregation as `/media/stats`. No model, no external inference.

use axum::extract::{Query, State};
use axum::Json;
use medialog_core::media::MediaType;
use medialog_core::recommendations::recommend;
use medialog_core::stats::MediaStats;
use serde::{Deserialize, Serialize};

use medialog_db::repositories::MediaRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /ai/recommendations` (`?type=`).
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
}

/// Response body for `GET /ai/recommendations`.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<&'static str>,
}

/// GET /ai/recommendations?type=
///
/// Fixed recommendation list for the given type, or one pick per type
/// when no type is given. Requires authentication like every other
/// non-auth route, even though the result is not personalized.
pub async fn recommendations(
    _user: AuthUser,
    Query(params): Query<RecommendationParams>,
) -> AppResult<Json<RecommendationsResponse>> {
    Ok(Json(RecommendationsResponse {
        recommendations: recommend(params.media_type),
    }))
}

/// GET /ai/insights
///
/// Aggregate view of the authenticated user's collection; same shape as
/// `/media/stats`.
pub async fn insights(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<MediaStats>> {
    let stats = MediaRepo::stats(&state.pool, user.user_id).await?;
    Ok(Json(stats))
}
