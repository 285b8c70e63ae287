//! Handlers for the `/media` resource (owner-scoped CRUD, search, stats).
//!
//! Every operation takes the authenticated user from the [`AuthUser`]
//! extractor and scopes reads and writes to that owner. Item lookups check
//! existence before ownership, so a missing item is 404 and a foreign-owned
//! item is 403.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use medialog_core::error::CoreError;
use medialog_core::media::{MediaStatus, MediaType};
use medialog_core::stats::MediaStats;
use medialog_core::types::DbId;
use medialog_core::validation::{validate_rating, validate_title};
use serde::Deserialize;

use medialog_db::models::media_item::{CreateMediaItem, MediaItem, UpdateMediaItem};
use medialog_db::repositories::MediaRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /media` (`?type=&status=`).
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub status: Option<MediaStatus>,
}

/// Query parameters for `GET /media/search` (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /media
///
/// Create a media item owned by the authenticated user.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMediaItem>,
) -> AppResult<(StatusCode, Json<MediaItem>)> {
    validate_title(&input.title)?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let item = MediaRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(
        item_id = item.id,
        user_id = user.user_id,
        media_type = item.media_type.as_str(),
        "Media item created",
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /media
///
/// List the authenticated user's items, optionally filtered by exact type
/// and/or status, most recently created first.
pub async fn list(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let items = MediaRepo::list(&state.pool, user.user_id, params.media_type, params.status).await?;
    Ok(Json(items))
}

/// GET /media/stats
///
/// Aggregate view of the authenticated user's collection.
pub async fn stats(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<MediaStats>> {
    let stats = MediaRepo::stats(&state.pool, user.user_id).await?;
    Ok(Json(stats))
}

/// GET /media/search?q=
///
/// Case-insensitive substring search over title and notes. A blank query
/// falls back to listing everything, matching the reference behavior.
pub async fn search(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MediaItem>>> {
    let query_text = params.q.as_deref().unwrap_or("");

    // Whitespace is significant inside the pattern; trimming is only for
    // the blank-query check.
    let items = if query_text.trim().is_empty() {
        MediaRepo::list(&state.pool, user.user_id, None, None).await?
    } else {
        MediaRepo::search(&state.pool, user.user_id, query_text).await?
    };
    Ok(Json(items))
}

/// GET /media/{id}
pub async fn get(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MediaItem>> {
    let item = fetch_owned(&state, id, user.user_id).await?;
    Ok(Json(item))
}

/// PATCH /media/{id}
///
/// Partial update: only provided fields are applied. An empty patch leaves
/// everything but `updated_at` unchanged.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaItem>,
) -> AppResult<Json<MediaItem>> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    fetch_owned(&state, id, user.user_id).await?;

    let item = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaItem",
            id,
        }))?;

    tracing::info!(item_id = id, user_id = user.user_id, "Media item updated");

    Ok(Json(item))
}

/// DELETE /media/{id}
///
/// Permanent delete; there is no tombstone to recover from.
pub async fn remove(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    fetch_owned(&state, id, user.user_id).await?;

    MediaRepo::delete(&state.pool, id).await?;

    tracing::info!(item_id = id, user_id = user.user_id, "Media item deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an item, distinguishing "does not exist" (NotFound) from "exists
/// but belongs to someone else" (Forbidden). Ownership is only checked
/// after existence is confirmed.
async fn fetch_owned(state: &AppState, id: DbId, user_id: DbId) -> AppResult<MediaItem> {
    let item = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaItem",
            id,
        }))?;

    if item.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only access your own media items".into(),
        )));
    }

    Ok(item)
}
