use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::simple::models::SimpleId;
use crate::inbound::http::router::AppState;

pub async fn delete_simple(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .simple_service
        .delete_simple(SimpleId(id))
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, "Simple deleted successfully", ()))
}
