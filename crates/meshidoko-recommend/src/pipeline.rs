//! Recommendation pipeline orchestration.

use futures::future::join_all;
use serde::Serialize;

use meshidoko_core::{
    access_description, classify_genre, estimate_budget, extract_features, genre_keyword,
    price_window, rank_candidates, Coordinate, PlaceCandidate, RankedRestaurant, SearchCriteria,
};
use meshidoko_openai::OpenAiClient;
use meshidoko_places::{NearbyPlace, PlacesClient, PlacesError};

use crate::error::RecommendError;
use crate::prompt::{enrichment_prompt, SYSTEM_PROMPT};
use crate::samples::fallback_restaurants;

/// Search radius when at most one genre is requested.
const SINGLE_SEARCH_RADIUS_M: u32 = 2000;

/// Tighter radius for the per-genre sub-searches of a multi-genre request.
const MULTI_GENRE_RADIUS_M: u32 = 1000;

/// At most this many candidates get a detail fetch before ranking.
const DETAIL_FETCH_LIMIT: usize = 12;

/// Number of leading results whose sentences may be rewritten.
const ENRICH_LIMIT: usize = 3;

/// Which path produced a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Places,
    Fallback,
}

/// A successful pipeline outcome: ranked suggestions plus the path that
/// produced them. Fallback is a success, not an error.
#[derive(Debug, Serialize)]
pub struct Recommendations {
    pub restaurants: Vec<RankedRestaurant>,
    pub source: RecommendationSource,
}

/// The recommendation orchestrator.
///
/// Holds the provider clients for the lifetime of the process; each
/// [`Recommender::recommend`] call is otherwise stateless, so concurrent
/// requests never observe each other.
pub struct Recommender {
    places: PlacesClient,
    openai: Option<OpenAiClient>,
}

impl Recommender {
    #[must_use]
    pub fn new(places: PlacesClient, openai: Option<OpenAiClient>) -> Self {
        Self { places, openai }
    }

    /// Runs the full pipeline for one search.
    ///
    /// 1. Resolve the area and search the places provider, ranking the
    ///    surviving candidates (primary path).
    /// 2. On any provider failure, geocode miss included, serve the
    ///    fixed sample set instead (fallback path).
    /// 3. When an OpenAI client is configured and the primary path
    ///    succeeded, rewrite the first three sentences; failures there are
    ///    logged and swallowed.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendError::InvalidCriteria`] when the criteria fail
    /// validation. Provider failures do not surface as errors.
    pub async fn recommend(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Recommendations, RecommendError> {
        criteria.validate()?;

        match self.search_places(criteria).await {
            Ok(mut restaurants) => {
                self.enrich(&mut restaurants, criteria).await;
                Ok(Recommendations {
                    restaurants,
                    source: RecommendationSource::Places,
                })
            }
            Err(e) => {
                tracing::warn!(
                    area = %criteria.area,
                    error = %e,
                    "places search failed; serving fallback samples"
                );
                Ok(Recommendations {
                    restaurants: fallback_restaurants(criteria),
                    source: RecommendationSource::Fallback,
                })
            }
        }
    }

    /// The primary path: geocode, search, detail, rank, project.
    async fn search_places(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<RankedRestaurant>, PlacesError> {
        let origin = self.places.geocode(&criteria.area).await?;
        let (min_price, max_price) = price_window(criteria.budget);

        let mut summaries = if criteria.genres.len() > 1 {
            self.multi_genre_search(criteria, origin, min_price, max_price)
                .await?
        } else {
            let keyword = criteria.genres.first().map(|g| genre_keyword(g));
            self.places
                .nearby_search(
                    origin,
                    SINGLE_SEARCH_RADIUS_M,
                    keyword,
                    min_price,
                    max_price,
                )
                .await?
        };
        summaries.truncate(DETAIL_FETCH_LIMIT);

        // Detail fetches are independent; issue them concurrently and
        // collect in input order so ranking stays reproducible. A failed
        // fetch drops that candidate only.
        let details = join_all(
            summaries
                .iter()
                .map(|summary| self.places.place_details(&summary.place_id)),
        )
        .await;

        let mut candidates = Vec::with_capacity(summaries.len());
        for (summary, result) in summaries.iter().zip(details) {
            match result {
                Ok(candidate) => candidates.push(candidate),
                Err(e) => {
                    tracing::warn!(
                        place_id = %summary.place_id,
                        name = %summary.name,
                        error = %e,
                        "place details fetch failed; dropping candidate"
                    );
                }
            }
        }

        let ranked = rank_candidates(candidates, criteria, origin);
        Ok(ranked
            .into_iter()
            .map(|candidate| project(candidate, criteria, origin))
            .collect())
    }

    /// One sub-search per requested genre (an OR search), unioned by
    /// place id. Sub-searches run concurrently; the union keeps the order
    /// genres were requested in, so the merge is deterministic no matter
    /// which search finishes first.
    async fn multi_genre_search(
        &self,
        criteria: &SearchCriteria,
        origin: Coordinate,
        min_price: u8,
        max_price: u8,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let searches = criteria.genres.iter().map(|genre| {
            self.places.nearby_search(
                origin,
                MULTI_GENRE_RADIUS_M,
                Some(genre_keyword(genre)),
                min_price,
                max_price,
            )
        });

        let mut seen = std::collections::HashSet::new();
        let mut merged = Vec::new();
        for result in join_all(searches).await {
            for place in result? {
                if seen.insert(place.place_id.clone()) {
                    merged.push(place);
                }
            }
        }
        Ok(merged)
    }

    /// Best-effort sentence rewrite for the leading results. All calls run
    /// concurrently and all complete before returning; an individual
    /// failure or empty completion keeps that restaurant's original
    /// sentence.
    async fn enrich(&self, restaurants: &mut [RankedRestaurant], criteria: &SearchCriteria) {
        let Some(openai) = &self.openai else {
            return;
        };
        if restaurants.is_empty() {
            return;
        }

        let prompts: Vec<String> = restaurants
            .iter()
            .take(ENRICH_LIMIT)
            .map(|restaurant| enrichment_prompt(restaurant, criteria))
            .collect();

        let completions = join_all(
            prompts
                .iter()
                .map(|prompt| openai.chat_completion(SYSTEM_PROMPT, prompt)),
        )
        .await;

        for (restaurant, completion) in restaurants.iter_mut().zip(completions) {
            match completion {
                Ok(text) if !text.is_empty() => restaurant.reason = text,
                Ok(_) => {
                    tracing::debug!(
                        restaurant = %restaurant.name,
                        "empty completion; keeping original sentence"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        restaurant = %restaurant.name,
                        error = %e,
                        "sentence rewrite failed; keeping original sentence"
                    );
                }
            }
        }
    }
}

/// Projects a ranked candidate into the response record, synthesizing the
/// recommendation sentence.
fn project(
    candidate: PlaceCandidate,
    criteria: &SearchCriteria,
    origin: Coordinate,
) -> RankedRestaurant {
    let genre = classify_genre(&candidate.types);
    let genre_match = criteria.matches_genre(genre);
    let reason = build_reason(
        genre,
        &criteria.area,
        genre_match,
        candidate.rating,
        candidate.price_level,
        criteria.budget,
    );

    RankedRestaurant {
        access: access_description(candidate.location, &criteria.area, Some(origin)),
        budget: estimate_budget(candidate.price_level, criteria.budget),
        features: extract_features(&candidate),
        genre: genre.to_string(),
        phone: candidate
            .phone
            .unwrap_or_else(|| "要問い合わせ".to_string()),
        name: candidate.name,
        reason,
        address: candidate.address,
        place_id: Some(candidate.place_id),
        rating: candidate.rating,
        website: candidate.website,
    }
}

/// The synthesized sentence: genre and area always, the genre-match
/// clause when applicable, then rating and price commentary when known.
fn build_reason(
    genre: &str,
    area: &str,
    genre_match: bool,
    rating: Option<f64>,
    price_level: Option<u8>,
    budget: u32,
) -> String {
    let match_clause = if genre_match {
        "希望ジャンルに一致する"
    } else {
        ""
    };
    let mut reason = format!("{genre}のお店で、{area}エリアの{match_clause}人気店です。");
    if let Some(rating) = rating.filter(|r| *r > 0.0) {
        reason.push_str(&format!("評価{rating}★"));
    }
    if price_level.is_some() {
        reason.push_str(&format!("、価格帯も{budget}円の予算に適しています。"));
    }
    reason
}
