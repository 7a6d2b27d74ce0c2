use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use meshidoko_core::SearchCriteria;
use meshidoko_recommend::RecommendError;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// `POST /api/v1/recommend`: run the full pipeline for one search.
///
/// The response is always one of: ranked live results, the fallback
/// sample set, a validation error, or a generic internal error. Upstream
/// error text never reaches the caller.
pub(super) async fn recommend(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Response {
    let Json(criteria) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected malformed recommend request");
            return ApiError::new(
                req_id.0,
                "validation_error",
                "request body is not a valid search request",
            )
            .into_response();
        }
    };

    match state.recommender.recommend(&criteria).await {
        Ok(recommendations) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: recommendations,
                meta: ResponseMeta::new(req_id.0),
            }),
        )
            .into_response(),
        Err(RecommendError::InvalidCriteria(e)) => {
            ApiError::new(req_id.0, "validation_error", e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "recommendation pipeline failed");
            ApiError::new(
                req_id.0,
                "internal_error",
                "failed to generate recommendations",
            )
            .into_response()
        }
    }
}
