//! Multi-criteria ranking of place candidates.
//!
//! Every comparison is deterministic: ties fall through explicit secondary
//! keys, and the stable sort leaves input order untouched only where no
//! further criterion exists. The final list is truncated to
//! [`MAX_RESULTS`], a hard contract of the response rather than a UI
//! nicety.

use std::cmp::Ordering;

use crate::genre::classify_genre;
use crate::geo::{haversine_km, Coordinate};
use crate::types::{PlaceCandidate, SearchCriteria, SortMode};

/// Hard cap on the number of ranked results returned to the caller.
pub const MAX_RESULTS: usize = 6;

/// Candidates at or under this distance from the origin form the
/// preferred partition of the distance sort.
pub const NEARBY_THRESHOLD_KM: f64 = 0.5;

/// Orders candidates by the criteria's sort mode and truncates to
/// [`MAX_RESULTS`].
#[must_use]
pub fn rank_candidates(
    mut candidates: Vec<PlaceCandidate>,
    criteria: &SearchCriteria,
    origin: Coordinate,
) -> Vec<PlaceCandidate> {
    match criteria.sort_mode {
        SortMode::Distance => candidates.sort_by(|a, b| compare_by_distance(a, b, origin)),
        SortMode::Rating => candidates.sort_by(|a, b| compare_by_rating(a, b, origin)),
        SortMode::GenreMatch => candidates.sort_by(|a, b| compare_by_genre_match(a, b, criteria)),
    }
    candidates.truncate(MAX_RESULTS);
    candidates
}

fn distance_to(origin: Coordinate, place: &PlaceCandidate) -> f64 {
    haversine_km(place.location, origin)
}

fn rating_or_zero(place: &PlaceCandidate) -> f64 {
    place.rating.unwrap_or(0.0)
}

/// Within-500m candidates first, then ascending distance inside each
/// partition.
fn compare_by_distance(a: &PlaceCandidate, b: &PlaceCandidate, origin: Coordinate) -> Ordering {
    let a_dist = distance_to(origin, a);
    let b_dist = distance_to(origin, b);
    let a_far = a_dist > NEARBY_THRESHOLD_KM;
    let b_far = b_dist > NEARBY_THRESHOLD_KM;
    a_far
        .cmp(&b_far)
        .then_with(|| a_dist.total_cmp(&b_dist))
}

/// Descending rating (absent rating counts as zero), ties broken by
/// ascending distance to the origin.
fn compare_by_rating(a: &PlaceCandidate, b: &PlaceCandidate, origin: Coordinate) -> Ordering {
    rating_or_zero(b)
        .total_cmp(&rating_or_zero(a))
        .then_with(|| distance_to(origin, a).total_cmp(&distance_to(origin, b)))
}

/// Requested-genre matches first, ties broken by descending rating. With
/// no requested genres this degenerates to descending rating alone.
fn compare_by_genre_match(
    a: &PlaceCandidate,
    b: &PlaceCandidate,
    criteria: &SearchCriteria,
) -> Ordering {
    if criteria.genres.is_empty() {
        return rating_or_zero(b).total_cmp(&rating_or_zero(a));
    }
    let a_match = criteria.matches_genre(classify_genre(&a.types));
    let b_match = criteria.matches_genre(classify_genre(&b.types));
    b_match
        .cmp(&a_match)
        .then_with(|| rating_or_zero(b).total_cmp(&rating_or_zero(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Coordinate = Coordinate {
        latitude: 35.658,
        longitude: 139.7016,
    };

    /// A point `km` north of the origin.
    fn point_at_km(km: f64) -> Coordinate {
        let degrees = km / (crate::geo::EARTH_RADIUS_KM * std::f64::consts::PI / 180.0);
        Coordinate::new(ORIGIN.latitude + degrees, ORIGIN.longitude)
    }

    fn candidate(name: &str, rating: Option<f64>, types: &[&str], km: f64) -> PlaceCandidate {
        PlaceCandidate {
            place_id: format!("id-{name}"),
            name: name.to_string(),
            address: String::new(),
            phone: None,
            website: None,
            rating,
            price_level: None,
            open_now: None,
            types: types.iter().map(|t| (*t).to_string()).collect(),
            location: point_at_km(km),
        }
    }

    fn criteria(sort_mode: SortMode, genres: &[&str]) -> SearchCriteria {
        SearchCriteria {
            date: String::new(),
            time: String::new(),
            party_size: 2,
            area: "渋谷".to_string(),
            budget: 5000,
            purpose: None,
            genres: genres.iter().map(|g| (*g).to_string()).collect(),
            requirements: None,
            sort_mode,
        }
    }

    fn names(ranked: &[PlaceCandidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn distance_sort_prefers_the_nearby_partition() {
        let candidates = vec![
            candidate("far-close", None, &[], 0.7),
            candidate("near-far", None, &[], 0.45),
            candidate("far-far", None, &[], 2.0),
            candidate("near-close", None, &[], 0.1),
        ];
        let ranked = rank_candidates(candidates, &criteria(SortMode::Distance, &[]), ORIGIN);
        assert_eq!(
            names(&ranked),
            vec!["near-close", "near-far", "far-close", "far-far"]
        );
    }

    #[test]
    fn rating_sort_descends_and_breaks_ties_by_distance() {
        let candidates = vec![
            candidate("four-far", Some(4.0), &[], 1.5),
            candidate("unrated", None, &[], 0.2),
            candidate("four-near", Some(4.0), &[], 0.4),
            candidate("best", Some(4.8), &[], 3.0),
        ];
        let ranked = rank_candidates(candidates, &criteria(SortMode::Rating, &[]), ORIGIN);
        assert_eq!(
            names(&ranked),
            vec!["best", "four-near", "four-far", "unrated"]
        );
    }

    #[test]
    fn genre_match_sort_leads_with_requested_genre_block() {
        // 3 和食 candidates with ratings [4.5, 3.0, 4.8] and 5 others with
        // higher ratings: the 和食 block leads, sorted by rating, then the
        // remainder by rating, truncated to six.
        let washoku = &["japanese_restaurant"];
        let italian = &["italian_restaurant"];
        let candidates = vec![
            candidate("w-45", Some(4.5), washoku, 0.3),
            candidate("o-49a", Some(4.9), italian, 0.3),
            candidate("w-30", Some(3.0), washoku, 0.3),
            candidate("o-50", Some(5.0), italian, 0.3),
            candidate("o-49b", Some(4.9), italian, 0.3),
            candidate("w-48", Some(4.8), washoku, 0.3),
            candidate("o-47", Some(4.7), italian, 0.3),
            candidate("o-46", Some(4.6), italian, 0.3),
        ];
        let ranked = rank_candidates(
            candidates,
            &criteria(SortMode::GenreMatch, &["和食"]),
            ORIGIN,
        );
        assert_eq!(
            names(&ranked),
            vec!["w-48", "w-45", "w-30", "o-50", "o-49a", "o-49b"]
        );
    }

    #[test]
    fn genre_match_without_requested_genres_is_rating_order() {
        let candidates = vec![
            candidate("low", Some(3.1), &["bar"], 0.3),
            candidate("high", Some(4.6), &["cafe"], 0.3),
            candidate("mid", Some(4.0), &["japanese_restaurant"], 0.3),
        ];
        let ranked = rank_candidates(candidates, &criteria(SortMode::GenreMatch, &[]), ORIGIN);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn result_list_is_truncated_to_six() {
        let candidates: Vec<PlaceCandidate> = (0..10)
            .map(|i| candidate(&format!("c{i}"), None, &[], 0.1 * f64::from(i)))
            .collect();
        let ranked = rank_candidates(candidates, &criteria(SortMode::Distance, &[]), ORIGIN);
        assert_eq!(ranked.len(), MAX_RESULTS);
    }

    #[test]
    fn ranking_is_idempotent() {
        let candidates = vec![
            candidate("a", Some(4.1), &["cafe"], 0.9),
            candidate("b", Some(4.1), &["bar"], 0.2),
            candidate("c", None, &[], 0.4),
        ];
        let first = rank_candidates(candidates, &criteria(SortMode::Rating, &[]), ORIGIN);
        let second = rank_candidates(first.clone(), &criteria(SortMode::Rating, &[]), ORIGIN);
        assert_eq!(names(&first), names(&second));
    }
}
