//! Repository for the `media_items` table.
//!
//! Every read and mutation here is either scoped by `user_id` in the query
//! itself (list, search, stats) or feeds the handler-level
//! existence-then-ownership check (`find_by_id` + compare owner).

use medialog_core::media::{MediaStatus, MediaType};
use medialog_core::search::like_pattern;
use medialog_core::stats::{build_stats, MediaStats, StatusTypeCount};
use medialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::media_item::{CreateMediaItem, MediaItem, UpdateMediaItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, title, media_type, status, rating, notes, cover_url, created_at, updated_at";

/// Provides CRUD, search, and aggregation for media items.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a new item owned by `user_id`, returning the created row.
    ///
    /// `status` defaults to WANT_TO_WATCH when the caller omits it.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateMediaItem,
    ) -> Result<MediaItem, sqlx::Error> {
        let status = input.status.unwrap_or_default();
        let query = format!(
            "INSERT INTO media_items (user_id, title, media_type, status, rating, notes, cover_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(status)
            .bind(input.rating)
            .bind(&input.notes)
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID regardless of owner.
    ///
    /// The caller decides between NotFound and Forbidden; collapsing the
    /// two here would lose that distinction.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_items WHERE id = $1");
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's items, optionally filtered by exact type and/or
    /// status, most recently created first.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        media_type: Option<MediaType>,
        status: Option<MediaStatus>,
    ) -> Result<Vec<MediaItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_items
             WHERE user_id = $1
               AND ($2::media_type IS NULL OR media_type = $2)
               AND ($3::media_status IS NULL OR status = $3)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(user_id)
            .bind(media_type)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over title and notes, scoped to
    /// the user's items, most recently created first.
    pub async fn search(
        pool: &PgPool,
        user_id: DbId,
        query_text: &str,
    ) -> Result<Vec<MediaItem>, sqlx::Error> {
        let pattern = like_pattern(query_text);
        let query = format!(
            "SELECT {COLUMNS} FROM media_items
             WHERE user_id = $1
               AND (title ILIKE $2 OR notes ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(user_id)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Partially update an item. Only non-`None` fields in `input` are
    /// applied; `updated_at` is always bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaItem,
    ) -> Result<Option<MediaItem>, sqlx::Error> {
        let query = format!(
            "UPDATE media_items SET
                title = COALESCE($2, title),
                media_type = COALESCE($3, media_type),
                status = COALESCE($4, status),
                rating = COALESCE($5, rating),
                notes = COALESCE($6, notes),
                cover_url = COALESCE($7, cover_url),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.media_type)
            .bind(input.status)
            .bind(input.rating)
            .bind(&input.notes)
            .bind(&input.cover_url)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate the user's collection: total count, average of non-null
    /// ratings (NULL when nothing is rated), and per-(status, type) counts.
    pub async fn stats(pool: &PgPool, user_id: DbId) -> Result<MediaStats, sqlx::Error> {
        let total_items: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM media_items WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        // AVG ignores NULL ratings and is itself NULL over an empty set.
        let average_rating: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(rating)::FLOAT8 FROM media_items WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let breakdown = sqlx::query_as::<_, StatusTypeCount>(
            "SELECT status, media_type, COUNT(*) AS count
             FROM media_items
             WHERE user_id = $1
             GROUP BY status, media_type
             ORDER BY status, media_type",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(build_stats(total_items, average_rating, breakdown))
    }
}
