//! Collection statistics assembly.
//!
//! The repository layer produces one aggregate row per `(status, type)`
//! pair plus the total count and the average of non-null ratings; this
//! module folds those into the typed [`MediaStats`] shape the API returns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::media::{MediaStatus, MediaType};

/// Count of items for one `(status, type)` pair.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StatusTypeCount {
    pub status: MediaStatus,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub count: i64,
}

/// Aggregate view of one user's collection.
#[derive(Debug, Serialize)]
pub struct MediaStats {
    /// Total number of items, rated or not.
    pub total_items: i64,
    /// Average of non-null ratings; `null` when nothing is rated, never 0.
    pub average_rating: Option<f64>,
    /// Item counts keyed by status.
    pub by_status: BTreeMap<MediaStatus, i64>,
    /// Item counts keyed by media type.
    pub by_type: BTreeMap<MediaType, i64>,
    /// Per `(status, type)` pair counts, as grouped by the database.
    pub breakdown: Vec<StatusTypeCount>,
}

/// Fold grouped counts into the full stats shape.
///
/// `by_status` and `by_type` are marginals of `breakdown`, so both sum to
/// `total_items` whenever `breakdown` covers every item.
pub fn build_stats(
    total_items: i64,
    average_rating: Option<f64>,
    breakdown: Vec<StatusTypeCount>,
) -> MediaStats {
    let mut by_status: BTreeMap<MediaStatus, i64> = BTreeMap::new();
    let mut by_type: BTreeMap<MediaType, i64> = BTreeMap::new();

    for entry in &breakdown {
        *by_status.entry(entry.status).or_insert(0) += entry.count;
        *by_type.entry(entry.media_type).or_insert(0) += entry.count;
    }

    MediaStats {
        total_items,
        average_rating,
        by_status,
        by_type,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(status: MediaStatus, media_type: MediaType, count: i64) -> StatusTypeCount {
        StatusTypeCount {
            status,
            media_type,
            count,
        }
    }

    #[test]
    fn empty_collection_has_null_average() {
        let stats = build_stats(0, None, vec![]);
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.average_rating, None);
        assert!(stats.by_status.is_empty());
        assert!(stats.by_type.is_empty());

        // The average must serialize as JSON null, not 0.
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["average_rating"].is_null());
    }

    #[test]
    fn marginals_sum_across_pairs() {
        let stats = build_stats(
            3,
            Some(9.5),
            vec![
                pair(MediaStatus::Completed, MediaType::Movie, 1),
                pair(MediaStatus::Completed, MediaType::Book, 1),
                pair(MediaStatus::Watching, MediaType::Movie, 1),
            ],
        );

        assert_eq!(stats.total_items, 3);
        assert_eq!(stats.average_rating, Some(9.5));
        assert_eq!(stats.by_status[&MediaStatus::Completed], 2);
        assert_eq!(stats.by_status[&MediaStatus::Watching], 1);
        assert_eq!(stats.by_type[&MediaType::Movie], 2);
        assert_eq!(stats.by_type[&MediaType::Book], 1);
        assert_eq!(stats.breakdown.len(), 3);
    }

    #[test]
    fn map_keys_serialize_as_wire_strings() {
        let stats = build_stats(
            1,
            Some(10.0),
            vec![pair(MediaStatus::WantToWatch, MediaType::TvShow, 1)],
        );
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_status"]["WANT_TO_WATCH"], 1);
        assert_eq!(json["by_type"]["TV_SHOW"], 1);
        assert_eq!(json["breakdown"][0]["type"], "TV_SHOW");
    }
}
