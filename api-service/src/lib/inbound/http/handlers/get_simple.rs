use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_simple::SimpleData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::simple::models::SimpleId;
use crate::inbound::http::router::AppState;

pub async fn get_simple(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiSuccess<SimpleData>, ApiError> {
    state
        .simple_service
        .get_simple(SimpleId(id))
        .await
        .map_err(ApiError::from)
        .map(|ref simple| {
            ApiSuccess::new(StatusCode::OK, "Simple retrieved successfully", simple.into())
        })
}
