use thiserror::Error;

/// Errors the recommendation pipeline reports past its boundary.
///
/// Provider failures never show up here: a failed places search serves the
/// fallback samples and a failed enrichment keeps the original sentences.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecommendError {
    /// The submitted criteria are unusable (blank area, zero party size
    /// or budget).
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(#[from] meshidoko_core::CriteriaError),
}
