//! Recommendation pipeline for meshidoko.
//!
//! Resolves the search area, queries the places provider (one sub-search
//! per requested genre), ranks candidates with the core comparators, and
//! projects the top results into ranked suggestions. Provider outages
//! degrade to a fixed sample set instead of an error, and sentence
//! enrichment through OpenAI is strictly best-effort.

mod error;
mod pipeline;
mod prompt;
mod samples;

pub use error::RecommendError;
pub use pipeline::{Recommendations, RecommendationSource, Recommender};
