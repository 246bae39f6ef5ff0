use axum::extract::State;
use axum::http::StatusCode;

use super::create_simple::SimpleData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_simples(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SimpleData>>, ApiError> {
    state
        .simple_service
        .get_all_simples()
        .await
        .map_err(ApiError::from)
        .map(|simples| {
            let data = simples.iter().map(SimpleData::from).collect();
            ApiSuccess::new(StatusCode::OK, "Simples retrieved successfully", data)
        })
}
