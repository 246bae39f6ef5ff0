use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::AuthenticatedUser;

/// Echo the identity the token gate attached to this request.
pub async fn me(
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        "OK",
        MeResponseData {
            user_id: identity.user_id.as_i64(),
            email: identity.email,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub user_id: i64,
    pub email: String,
}
