//! Media item enumerations.
//!
//! Both enums travel as SCREAMING_SNAKE_CASE strings on the wire and map
//! to PostgreSQL enum types of the same name in the database (created in
//! the initial migration). Variant sets are closed: an unknown value is a
//! deserialization error, which the API surfaces as a 400.

use serde::{Deserialize, Serialize};

/// Kind of tracked media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "media_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Movie,
    TvShow,
    Book,
    Game,
    Podcast,
}

impl MediaType {
    /// Wire / database representation of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "MOVIE",
            MediaType::TvShow => "TV_SHOW",
            MediaType::Book => "BOOK",
            MediaType::Game => "GAME",
            MediaType::Podcast => "PODCAST",
        }
    }

    /// All variants, in declaration order.
    pub const ALL: [MediaType; 5] = [
        MediaType::Movie,
        MediaType::TvShow,
        MediaType::Book,
        MediaType::Game,
        MediaType::Podcast,
    ];
}

/// Consumption status of a tracked item.
///
/// There is no enforced transition graph: any status may move to any other
/// via a partial update. This is a personal tracker, not a workflow engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "media_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    WantToWatch,
    Watching,
    Completed,
    Dropped,
    OnHold,
}

impl Default for MediaStatus {
    /// New items start as WANT_TO_WATCH unless the caller says otherwise.
    fn default() -> Self {
        MediaStatus::WantToWatch
    }
}

impl MediaStatus {
    /// Wire / database representation of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaStatus::WantToWatch => "WANT_TO_WATCH",
            MediaStatus::Watching => "WATCHING",
            MediaStatus::Completed => "COMPLETED",
            MediaStatus::Dropped => "DROPPED",
            MediaStatus::OnHold => "ON_HOLD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_serializes_to_screaming_snake_case() {
        let json = serde_json::to_string(&MediaType::TvShow).unwrap();
        assert_eq!(json, "\"TV_SHOW\"");
    }

    #[test]
    fn media_type_round_trips() {
        for ty in MediaType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            let back: MediaType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn unknown_media_type_is_rejected() {
        let result = serde_json::from_str::<MediaType>("\"VINYL\"");
        assert!(result.is_err(), "unknown variant must not deserialize");
    }

    #[test]
    fn status_defaults_to_want_to_watch() {
        assert_eq!(MediaStatus::default(), MediaStatus::WantToWatch);
        assert_eq!(MediaStatus::default().as_str(), "WANT_TO_WATCH");
    }

    #[test]
    fn status_deserializes_from_wire_form() {
        let status: MediaStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, MediaStatus::OnHold);
    }
}
