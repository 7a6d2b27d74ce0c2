//! Core domain types and ranking logic for meshidoko.
//!
//! Everything in this crate is pure: geographic distance, genre
//! classification, feature extraction, and the ranking comparators have no
//! I/O and no provider dependencies. The provider clients and the
//! orchestrator build on these types.

use thiserror::Error;

mod access;
mod app_config;
mod budget;
mod config;
mod features;
mod genre;
mod geo;
mod ranking;
mod types;

pub use access::access_description;
pub use app_config::{AppConfig, Environment};
pub use budget::{estimate_budget, price_window};
pub use config::{load_app_config, load_app_config_from_env};
pub use features::extract_features;
pub use genre::{classify_genre, genre_keyword, GENERIC_GENRE};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
pub use ranking::{rank_candidates, MAX_RESULTS, NEARBY_THRESHOLD_KM};
pub use types::{PlaceCandidate, RankedRestaurant, SearchCriteria, SortMode};

/// Errors raised while loading application configuration from the
/// environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised by [`SearchCriteria::validate`].
#[derive(Debug, Error)]
pub enum CriteriaError {
    #[error("area must not be empty")]
    EmptyArea,

    #[error("party size must be a positive integer")]
    InvalidPartySize,

    #[error("budget must be a positive amount")]
    InvalidBudget,
}
