use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_simple::SimpleData;
use super::create_simple::SimpleRequestBody;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::simple::models::SimpleId;
use crate::domain::simple::models::SimpleName;
use crate::inbound::http::router::AppState;

pub async fn update_simple(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SimpleRequestBody>,
) -> Result<ApiSuccess<SimpleData>, ApiError> {
    let name = SimpleName::new(body.name).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .simple_service
        .update_simple(SimpleId(id), name)
        .await
        .map_err(ApiError::from)
        .map(|ref simple| {
            ApiSuccess::new(StatusCode::OK, "Simple updated successfully", simple.into())
        })
}
