use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::simple::models::Simple;
use crate::domain::simple::models::SimpleName;
use crate::inbound::http::router::AppState;

pub async fn create_simple(
    State(state): State<AppState>,
    Json(body): Json<SimpleRequestBody>,
) -> Result<ApiSuccess<SimpleData>, ApiError> {
    let name = SimpleName::new(body.name).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .simple_service
        .create_simple(name)
        .await
        .map_err(ApiError::from)
        .map(|ref simple| {
            ApiSuccess::new(StatusCode::CREATED, "Simple created successfully", simple.into())
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleRequestBody {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleData {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Simple> for SimpleData {
    fn from(simple: &Simple) -> Self {
        Self {
            id: simple.id.as_i64(),
            name: simple.name.as_str().to_string(),
            created_at: simple.created_at,
            updated_at: simple.updated_at,
        }
    }
}
