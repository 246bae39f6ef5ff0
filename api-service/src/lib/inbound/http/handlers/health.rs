use axum::http::StatusCode;

use super::ApiSuccess;

pub async fn get_health() -> ApiSuccess<()> {
    ApiSuccess::new(StatusCode::OK, "OK", ())
}
