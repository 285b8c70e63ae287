//! Rule-based recommendation lists.
//!
//! Deliberately a pure lookup table: a fixed list of well-known titles per
//! media type, with no personalization and no external calls. Callers that
//! want something smarter should replace this module wholesale rather than
//! grow it.

use crate::media::MediaType;

const MOVIES: [&str; 5] = [
    "The Shawshank Redemption",
    "Inception",
    "The Dark Knight",
    "Pulp Fiction",
    "The Matrix",
];

const TV_SHOWS: [&str; 5] = [
    "Breaking Bad",
    "Game of Thrones",
    "Stranger Things",
    "The Office",
    "Friends",
];

const BOOKS: [&str; 5] = [
    "The Great Gatsby",
    "To Kill a Mockingbird",
    "1984",
    "Pride and Prejudice",
    "The Catcher in the Rye",
];

const GAMES: [&str; 5] = [
    "The Witcher 3",
    "Red Dead Redemption 2",
    "God of War",
    "The Last of Us",
    "Minecraft",
];

const PODCASTS: [&str; 5] = [
    "The Joe Rogan Experience",
    "Serial",
    "This American Life",
    "Radiolab",
    "The Daily",
];

/// Return the fixed recommendation list for one media type.
pub fn for_type(media_type: MediaType) -> &'static [&'static str] {
    match media_type {
        MediaType::Movie => &MOVIES,
        MediaType::TvShow => &TV_SHOWS,
        MediaType::Book => &BOOKS,
        MediaType::Game => &GAMES,
        MediaType::Podcast => &PODCASTS,
    }
}

/// Recommendations for an optional type filter.
///
/// With no type given, returns the first pick of every type's list.
pub fn recommend(media_type: Option<MediaType>) -> Vec<&'static str> {
    match media_type {
        Some(ty) => for_type(ty).to_vec(),
        None => MediaType::ALL
            .iter()
            .map(|ty| for_type(*ty)[0])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_five_fixed_titles() {
        for ty in MediaType::ALL {
            assert_eq!(for_type(ty).len(), 5);
        }
    }

    #[test]
    fn typed_request_returns_that_list() {
        let recs = recommend(Some(MediaType::Book));
        assert_eq!(recs, BOOKS.to_vec());
    }

    #[test]
    fn untyped_request_mixes_one_per_type() {
        let recs = recommend(None);
        assert_eq!(
            recs,
            vec![MOVIES[0], TV_SHOWS[0], BOOKS[0], GAMES[0], PODCASTS[0]]
        );
    }

    #[test]
    fn results_are_stable_across_calls() {
        assert_eq!(recommend(Some(MediaType::Game)), recommend(Some(MediaType::Game)));
    }
}
