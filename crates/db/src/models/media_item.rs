//! Media item entity model and DTOs.

use medialog_core::media::{MediaStatus, MediaType};
use medialog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full media item row from the `media_items` table.
///
/// The owner (`user_id`) is set at creation and immutable thereafter.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MediaItem {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub status: MediaStatus,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a media item. `status` defaults to WANT_TO_WATCH.
#[derive(Debug, Deserialize)]
pub struct CreateMediaItem {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub status: Option<MediaStatus>,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub cover_url: Option<String>,
}

/// DTO for partially updating a media item. Absent fields are left
/// untouched (there is no way to null a field out, matching the original
/// partial-merge behavior).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMediaItem {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub status: Option<MediaStatus>,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub cover_url: Option<String>,
}
